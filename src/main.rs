//! Report Filter Frontend Entry Point

mod app;
mod config;
mod console;
mod controls;
mod dom;
mod timer;
mod url;

fn main() {
    console_error_panic_hook::set_once();
    app::start();
}
