//! Interactive command loop
//!
//! A blocking prompt-driven loop over four commands: `convert`, `help`,
//! `formats` and `exit`. Each conversion runs synchronously to completion
//! before the next prompt; a failed conversion never ends the loop.

use std::io;
use std::path::Path;
use std::time::Duration;

use console::style;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use crate::convert::convert;
use crate::error::ConvertError;
use crate::format::Format;

const COMMANDS: [&str; 4] = ["convert", "help", "formats", "exit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Convert,
    Help,
    Formats,
    Exit,
}

/// Run the command loop until `exit` is selected or stdin closes
pub fn run() -> io::Result<()> {
    show_welcome();

    loop {
        println!();
        match prompt_command()? {
            Command::Convert => convert_command()?,
            Command::Help => show_welcome(),
            Command::Formats => show_formats(),
            Command::Exit => {
                println!("{}", style("Thanks for using imgconv! Goodbye!").yellow());
                break;
            }
        }
    }
    Ok(())
}

fn prompt_command() -> io::Result<Command> {
    let choice = Select::new()
        .with_prompt("Enter command")
        .items(&COMMANDS)
        .default(0)
        .interact()
        .map_err(|e| io::Error::other(format!("command selection failed: {e}")))?;

    Ok(match choice {
        0 => Command::Convert,
        1 => Command::Help,
        2 => Command::Formats,
        3 => Command::Exit,
        _ => unreachable!(),
    })
}

fn convert_command() -> io::Result<()> {
    let input: String = Input::new()
        .with_prompt("Enter input image path")
        .interact_text()
        .map_err(|e| io::Error::other(format!("input path prompt failed: {e}")))?;
    let input_path = Path::new(&input);

    if !input_path.exists() {
        println!("{}", style("Error: Input file does not exist").red());
        return Ok(());
    }

    let output: String = Input::new()
        .with_prompt("Enter output image path")
        .interact_text()
        .map_err(|e| io::Error::other(format!("output path prompt failed: {e}")))?;
    let output_path = Path::new(&output);

    if Format::from_path(input_path).is_none() || Format::from_path(output_path).is_none() {
        println!("{}", style("Error: Unsupported file format").red());
        show_formats();
        return Ok(());
    }

    print_banner(input_path, output_path);
    log::info!("converting {} -> {}", input_path.display(), output_path.display());

    let spinner = conversion_spinner();
    let result = convert(input_path, output_path);
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            log::info!("conversion succeeded: {}", output_path.display());
            println!("{}", style("Conversion completed successfully!").green());
        }
        Err(err) => {
            log::error!("conversion failed: {err}");
            println!("{} {}", style("Conversion failed!").red().bold(), style(&err).red());
            if matches!(err, ConvertError::UnsupportedFormat(_)) {
                show_formats();
            }
        }
    }
    Ok(())
}

fn conversion_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message("Converting...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_banner(input: &Path, output: &Path) {
    let input_name = input.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    let output_name = output.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();

    println!("{}", style("Image Format Converter").green().bold());
    println!(
        "Converting: {} -> {}",
        style(input_name).cyan(),
        style(output_name).cyan()
    );
}

/// Print the welcome banner and command summary
pub fn show_welcome() {
    println!("{}", style("imgconv").cyan().bold());
    println!("Convert images between different formats.");
    println!();
    println!("Commands:");
    println!("  {} Convert an image from one format to another", padded("convert"));
    println!("  {} Show this help message", padded("help"));
    println!("  {} Show supported formats", padded("formats"));
    println!("  {} Exit the program", padded("exit"));
}

/// Print the format-to-extension table in the fixed display order
pub fn show_formats() {
    println!("{}", style("Supported image formats").bold());
    for format in Format::ALL {
        println!(
            "  {} {}",
            style(format!("{:<8}", format.name())).cyan(),
            style(format.extensions().join(", ")).green()
        );
    }
}

fn padded(command: &str) -> console::StyledObject<String> {
    style(format!("{command:<10}")).cyan()
}
