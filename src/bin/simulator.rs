use convert_core::trace_init::init_tracing;
use convert_core::{Converter, Script};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

fn print_header(from: Script) {
    println!("{}", "Akshar conversion shell".bold());
    println!("---------------------------------------------------------------");
    println!("Type a line to see every rendering. ':from <script>' switches");
    println!("the input script (english, unicode, preeti). 'exit' quits.");
    println!("Reading: {}\n", from.to_string().cyan());
}

fn print_renderings(converter: &Converter, line: &str, from: Script) {
    for to in Script::ALL {
        let label = format!("{:>8}", to.name());
        let rendered = converter.convert(line, from, to);
        if to == from {
            println!("  {} : {}", label.dark_grey(), rendered);
        } else {
            println!("  {} : {}", label.green(), rendered);
        }
    }
}

fn main() -> io::Result<()> {
    init_tracing();
    let converter = Converter::global();
    let mut from = Script::English;
    print_header(from);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{} ", ">".yellow());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim_end_matches(['\r', '\n']);

        match line.trim() {
            "exit" => break,
            "" => continue,
            cmd if cmd.starts_with(":from") => match cmd[":from".len()..].parse::<Script>() {
                Ok(script) => {
                    from = script;
                    println!("Reading: {}", from.to_string().cyan());
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
            _ => print_renderings(converter, line, from),
        }
    }
    Ok(())
}
