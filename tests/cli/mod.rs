mod config;
mod distance;
mod graph;
mod ladder;
mod verify;
