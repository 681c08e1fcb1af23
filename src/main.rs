//! RAX FTP Client - Entry Point
//!
//! Command-line client for a minimal FTP subset: authenticate, retrieve
//! files over active-mode data connections, quit.

use clap::Parser;
use log::info;
use std::net::ToSocketAddrs;
use std::process::exit;

use rax_ftp_client::error::handlers::report_error;
use rax_ftp_client::shell::{self, Operation};
use rax_ftp_client::{ClientConfig, Session};

#[derive(Parser)]
#[command(name = "rax-ftp-client", about = "Minimal FTP client for RAX servers")]
struct Args {
    /// Server host name or IP address
    host: String,

    /// Server control port
    port: u16,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = ClientConfig::load().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        exit(1);
    });

    let addr = match (args.host.as_str(), args.port).to_socket_addrs() {
        Ok(mut addrs) => match addrs.next() {
            Some(addr) => addr,
            None => {
                eprintln!("No address found for {}:{}", args.host, args.port);
                exit(1);
            }
        },
        Err(e) => {
            eprintln!("Cannot resolve {}:{}: {}", args.host, args.port, e);
            exit(1);
        }
    };

    info!("Connecting to {}", addr);
    let mut session = Session::connect(addr, config).unwrap_or_else(|e| {
        eprintln!("{}", e);
        exit(1);
    });

    let username = read_required("username: ");
    let password = read_required("passwd: ");
    if let Err(e) = session.authenticate(&username, &password) {
        report_error(&e);
        eprintln!("{}", e);
        exit(1);
    }

    loop {
        let line = match shell::prompt("Operation: ") {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Input error: {}", e);
                exit(1);
            }
        };

        let operation = match shell::parse_operation(&line) {
            Some(operation) => operation,
            None => continue,
        };

        match operation {
            Operation::Get(file_name) => match session.get(&file_name) {
                Ok(received) => println!("Retrieved {} ({} bytes)", file_name, received),
                Err(e) => {
                    report_error(&e);
                    eprintln!("{}", e);
                    if e.is_fatal() {
                        exit(1);
                    }
                }
            },
            Operation::Quit => {
                if let Err(e) = session.quit() {
                    report_error(&e);
                    eprintln!("{}", e);
                    exit(1);
                }
                break;
            }
            Operation::Unknown(word) => {
                println!("{}: operation not supported", word);
            }
        }
    }
}

fn read_required(label: &str) -> String {
    match shell::prompt(label) {
        Ok(Some(input)) if !input.is_empty() => input,
        Ok(_) => {
            eprintln!("Input required");
            exit(1);
        }
        Err(e) => {
            eprintln!("Input error: {}", e);
            exit(1);
        }
    }
}
