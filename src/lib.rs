// Library root
// -----------
// The binary (`main.rs`) only parses configuration and hands over to `ui`.
//
// Module responsibilities:
// - `route`: the route record, fuel estimate and duration split.
// - `api`: the MapQuest directions client and its response parser.
// - `fallback`: static route table, flat estimate and the chain tying
//   them to the live client.
// - `format`: console rendering of a route.
// - `ui`: the prompt loop.
// - `config` / `cli`: runtime settings and their flag/env binding.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fallback;
pub mod format;
pub mod logging;
pub mod route;
pub mod ui;
