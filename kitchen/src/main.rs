// Copyright 2022 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::net::SocketAddr;

use clap::{arg, command, ArgMatches, Command};
use tracing::{error, Level};

mod web;

const DEFAULT_LISTEN: &str = "127.0.0.1:3030";

fn create_app() -> Command<'static> {
    command!()
        .about("Serves the recipe ui")
        .arg(arg!(-v --verbose "Log at debug level"))
        .subcommand(
            Command::new("serve")
                .about("Serve the recipe ui over http")
                .arg(
                    arg!(-l --listen <SOCKET> "Address to listen on")
                        .required(false)
                        .default_value(DEFAULT_LISTEN),
                ),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}

fn get_listen_socket(matches: &ArgMatches) -> Result<SocketAddr, String> {
    let listen = matches.value_of("listen").unwrap_or(DEFAULT_LISTEN);
    listen
        .parse()
        .map_err(|e| format!("Invalid listen address {}: {}", listen, e))
}

fn main() {
    let matches = create_app().get_matches();
    let level = if matches.is_present("verbose") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();
    if let Some(matches) = matches.subcommand_matches("serve") {
        let listen_socket = match get_listen_socket(matches) {
            Ok(addr) => addr,
            Err(msg) => {
                error!(msg = msg.as_str(), "Unable to start server");
                std::process::exit(1);
            }
        };
        async_std::task::block_on(async { web::ui_main(listen_socket).await });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_listen_socket() {
        let matches = create_app().get_matches_from(vec!["kitchen", "serve"]);
        let serve = matches.subcommand_matches("serve").expect("serve subcommand");
        assert_eq!(
            get_listen_socket(serve),
            Ok("127.0.0.1:3030".parse().expect("valid socket"))
        );
    }

    #[test]
    fn test_custom_listen_socket() {
        let matches =
            create_app().get_matches_from(vec!["kitchen", "serve", "--listen", "0.0.0.0:8080"]);
        let serve = matches.subcommand_matches("serve").expect("serve subcommand");
        assert_eq!(
            get_listen_socket(serve),
            Ok("0.0.0.0:8080".parse().expect("valid socket"))
        );
    }

    #[test]
    fn test_bad_listen_socket() {
        let matches =
            create_app().get_matches_from(vec!["kitchen", "serve", "--listen", "not-a-socket"]);
        let serve = matches.subcommand_matches("serve").expect("serve subcommand");
        assert!(get_listen_socket(serve).is_err());
    }

    #[test]
    fn test_app_definition() {
        create_app().debug_assert();
    }
}
