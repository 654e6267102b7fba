//! Exit handling: signal handlers and terminal restoration.

/// Restore canonical mode and echo using termios directly.
fn reset_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit, so it also runs after an interrupted hidden prompt.
extern "C" fn cleanup_on_exit() {
    reset_termios();
    // stdout may carry the password into a pipe; draw on stderr only
    unsafe {
        if libc::isatty(libc::STDERR_FILENO) == 1 {
            let reset = b"\x1b[0m\x1b[?25h";
            libc::write(
                libc::STDERR_FILENO,
                reset.as_ptr() as *const libc::c_void,
                reset.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP - exit, atexit handles cleanup.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}
