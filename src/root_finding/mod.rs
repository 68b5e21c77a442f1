// common helpers 
pub mod algorithms; 
pub mod report; 
pub mod errors; 
pub mod trace; 
pub(crate) mod config;

// target function and algorithms 
pub mod target; 
pub mod secant;
pub mod modified_secant;
