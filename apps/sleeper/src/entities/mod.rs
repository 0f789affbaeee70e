pub mod sleepers;
