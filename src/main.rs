use std::io::{self, Write}; 
use std::process::ExitCode; 

use secant::driver; 

fn main() -> ExitCode { 
    let stdin  = io::stdin(); 
    let mut stdout = io::stdout().lock(); 

    match driver::run(stdin.lock(), &mut stdout) { 
        Ok(()) => ExitCode::SUCCESS, 
        Err(e) => { 
            let _ = stdout.flush(); 
            eprintln!("error: {e}"); 
            ExitCode::FAILURE 
        }
    }
}
