use std::ffi::{CStr, c_char};

use anyhow::anyhow;
use glcore::{Api, GLenum, RENDERER, VENDOR};

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = format!(
            "{level:<5} {target}:{line:<4} > {text}",
            level = record.level(),
            target = record.target(),
            line = record
                .line()
                .map_or_else(|| "?".to_string(), |line| line.to_string()),
            text = record.args(),
        );
        eprintln!("{msg}");
    }

    fn flush(&self) {}
}

impl Logger {
    fn init() {
        log::set_logger(&Logger).expect("could not set logger");
        log::set_max_level(log::LevelFilter::Trace);
    }
}

fn get_string(api: &Api, name: GLenum) -> anyhow::Result<String> {
    let ptr = unsafe { api.GetString(name) };
    if ptr.is_null() {
        return Err(anyhow!(format!("got null string for {name:#x}")));
    }
    let string = unsafe { CStr::from_ptr(ptr as *const c_char) };
    Ok(string.to_string_lossy().into_owned())
}

fn main() {
    Logger::init();

    let mut api =
        unsafe { Api::load() }.expect("could not load gl (is a context current on this thread?)");

    log::info!("version: {}", api.version());
    log::info!(
        "vendor: {}",
        get_string(&api, VENDOR).expect("could not get vendor")
    );
    log::info!(
        "renderer: {}",
        get_string(&api, RENDERER).expect("could not get renderer")
    );
    log::info!("extensions: {}", api.extensions().len());

    // trace-log everything from here on; watch glGetError get reported as a
    // call of its own
    api.install_debug();
    _ = unsafe { api.GetError() };
}
