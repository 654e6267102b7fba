mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;

pub use flags::CliFlags;
pub use parse::parse;

use context::{Context, Halt};

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Run `hintpass --help` for usage.");
            return 2;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Halt::Done) => 0,
        Err(Halt::Usage(msg)) => {
            prompts::error(&format!("Error: {msg}"));
            2
        }
        Err(Halt::Failed(msg)) => {
            prompts::error(&format!("Error: {msg}"));
            1
        }
    }
}
