/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Command line front end, converting a YAML file into
//! `name: value` lines.

use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser as _;
use tracing_subscriber::EnvFilter;
use yamlkeys::{
    event::{types::EventData, walk, Event, Listener, Parser},
    scanner::Lexer,
    Key, KeyListener,
};

const RULE: &str = "----------";

#[derive(Debug, clap::Parser)]
#[command(name = "yamlkeys")]
#[command(about = "Convert a YAML file into hierarchical keys", long_about = None)]
#[command(version)]
struct Cli
{
    /// YAML file to read
    file: PathBuf,

    /// Name of the key every other key is placed below
    #[arg(short, long, default_value = "user")]
    root: String,

    /// Print the token stream before the keys
    #[arg(long)]
    tokens: bool,

    /// Print the parse tree before the keys
    #[arg(long)]
    events: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode
{
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(&cli)
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) =>
        {
            match err.downcast_ref::<yamlkeys::Error>()
            {
                Some(e) if e.has_context() => eprintln!("{}:{} {}", e.line(), e.column(), e.reason()),
                _ => eprintln!("{:#}", err),
            }

            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: u8)
{
    let filter = match verbose
    {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()>
{
    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("Unable to open file '{}'", cli.file.display()))?;
    let name = cli.file.display().to_string();
    let dump = cli.tokens || cli.events;

    if dump
    {
        section("input");
        print!("{}", text);
        if !text.ends_with('\n')
        {
            println!();
        }
    }

    if cli.tokens
    {
        section("tokens");

        for token in Lexer::with_name(&text, name.as_str())
        {
            println!("{}", token?.display(&text));
        }
    }

    if cli.events
    {
        section("tree");

        let mut printer = TreePrinter::default();
        walk(Parser::new(Lexer::with_name(&text, name.as_str())), &mut printer)?;
    }

    let mut listener = KeyListener::new(Key::new(&cli.root));
    walk(Parser::new(Lexer::with_name(&text, name.as_str())), &mut listener)?;

    if dump
    {
        section("output");
    }

    for key in listener.key_set()
    {
        println!("{}: {}", key, key.value().unwrap_or_default());
    }

    Ok(())
}

fn section(title: &str)
{
    println!("{} {} {}", RULE, title, RULE);
}

/// Prints each node of the tree on its own line, indented
/// by depth
#[derive(Debug, Default)]
struct TreePrinter
{
    depth: usize,
}

impl Listener for TreePrinter
{
    fn dispatch(&mut self, event: &Event<'_>)
    {
        match event.data()
        {
            EventData::Enter(node) =>
            {
                println!(
                    "{:indent$}{} ({}:{})",
                    "",
                    node,
                    event.line(),
                    event.column(),
                    indent = self.depth * 2
                );
                self.depth += 1;
            },
            EventData::Exit(_) => self.depth = self.depth.saturating_sub(1),
            EventData::StreamStart | EventData::StreamEnd =>
            {},
        }
    }
}
