//! Platform-specific configuration

use std::io;
use std::process::Command;

/// Save shortcut display for form help text
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Open a link in the platform's default handler
#[cfg(target_os = "macos")]
pub fn open_url(url: &str) -> io::Result<()> {
    Command::new("open").arg(url).spawn().map(|_| ())
}

/// Open a link in the platform's default handler
#[cfg(target_os = "windows")]
pub fn open_url(url: &str) -> io::Result<()> {
    Command::new("cmd")
        .args(["/C", "start", "", url])
        .spawn()
        .map(|_| ())
}

/// Open a link in the platform's default handler
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn open_url(url: &str) -> io::Result<()> {
    Command::new("xdg-open").arg(url).spawn().map(|_| ())
}
