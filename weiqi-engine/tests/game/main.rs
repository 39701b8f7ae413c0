mod common;

mod ai;
mod capture;
mod persistence;
mod scoring;
mod undo;
