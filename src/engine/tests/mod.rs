mod adjacency;
mod scenarios;
mod utils;
