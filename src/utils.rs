use std::path::PathBuf;

#[cfg(windows)]
use windows::Win32::{
    Storage::FileSystem::GetLogicalDrives,
    System::{Com::CoTaskMemFree, Environment::GetCommandLineW},
    UI::Shell::{FOLDERID_Windows, SHGetKnownFolderPath, KF_FLAG_DEFAULT}
};

/// The command line exactly as the OS reports it, or `None` if it isn't valid UTF-16.
#[cfg(windows)]
pub fn raw_command_line() -> Option<String> {
    unsafe { GetCommandLineW().to_string().ok() }
}

/// Outside Windows there is no single command line string, so one is rebuilt
/// from argv. The program name is quoted the way the launcher quotes paths so
/// it can be recognised and stripped; every later element is `shlex` quoted,
/// which the spawner splits back into the identical argv.
#[cfg(not(windows))]
pub fn raw_command_line() -> Option<String> {
    let mut args = std::env::args_os().map(|arg| arg.into_string().ok());
    let program = args.next()??;

    let mut line = crate::launcher::smart_quote(&program).into_owned();
    for arg in args {
        let arg = arg?;
        line.push(' ');
        line.push_str(&shlex::try_quote(&arg).ok()?);
    }
    Some(line)
}

#[cfg(windows)]
pub fn get_windows_directory() -> Option<PathBuf> {
    let windows_dir_wstr = unsafe { SHGetKnownFolderPath(&FOLDERID_Windows, KF_FLAG_DEFAULT, None).ok()? };
    let windows_dir_str = unsafe { windows_dir_wstr.to_string() };
    unsafe { CoTaskMemFree(Some(windows_dir_wstr.0 as *const _)) };
    windows_dir_str.ok().map(PathBuf::from)
}

/// The file manager the launch is delegated to.
#[cfg(windows)]
pub fn default_shell() -> PathBuf {
    get_windows_directory()
        .or_else(|| std::env::var_os("SystemRoot").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(r"C:\Windows"))
        .join("explorer.exe")
}

#[cfg(not(windows))]
pub fn default_shell() -> PathBuf {
    PathBuf::from("/usr/bin/xdg-open")
}

/// Root of every mounted drive letter, in letter order.
#[cfg(windows)]
pub fn get_drives() -> Vec<PathBuf> {
    let bitmask = unsafe { GetLogicalDrives() };

    (0..26u8)
        .filter(|i| bitmask & (1u32 << i) != 0)
        .map(|i| PathBuf::from(format!("{}:\\", (b'A' + i) as char)))
        .collect()
}

#[cfg(not(windows))]
pub fn get_drives() -> Vec<PathBuf> {
    vec![PathBuf::from("/")]
}
