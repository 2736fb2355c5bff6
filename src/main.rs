use log::debug;
use std::env;
use std::error::Error;
use std::io;
use std::process;

use rusty_teller::{
    write_csv, Authenticator, BalanceRow, Registrar, TellerConfig, REGISTRATION_SUCCESSFUL,
};

const USAGE: &str = "Usage:
  rusty-teller lookup <username>
  rusty-teller login <username> <password>
  rusty-teller signup <username> <password> <confirm-password>";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let config = TellerConfig::load()?;
    debug!("Loaded configuration: {:?}", config);

    match args.as_slice() {
        ["lookup", username] => {
            let accounts = config.accounts();
            let record = accounts.find_account(username)?;
            let row = BalanceRow::try_from(&record)?;
            write_csv(io::stdout(), std::iter::once(row))?;
        }
        ["login", username, password] => {
            let outcome = Authenticator::new(config.credentials()).authenticate(username, password);
            let message = outcome.message.unwrap_or_default();
            if !outcome.success {
                return Err(message.into());
            }
            println!("{}", message);
        }
        ["signup", username, password, confirmation] => {
            Registrar::new(config.credentials()).register(username, password, confirmation)?;
            println!("{}", REGISTRATION_SUCCESSFUL);
        }
        _ => return Err(USAGE.into()),
    }
    Ok(())
}
