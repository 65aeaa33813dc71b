use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use vec_llist::{DoublyLinkedList, DynamicArray, policy};

#[derive(Parser, Debug)]
#[command(name = "vec-llist-demo")]
#[command(version, about = "Scripted walkthrough of the array and linked list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the dynamic array script
    Vector {
        /// Initial capacity of the array
        #[arg(short, long, default_value_t = 10)]
        capacity: usize,
    },
    /// Run the linked list script
    List,
    /// Run both scripts
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Command::All) {
        Command::Vector { capacity } => run_vector(capacity)?,
        Command::List => run_list(),
        Command::All => {
            run_vector(10)?;
            println!();
            run_list();
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run_vector(capacity: usize) -> Result<()> {
    anyhow::ensure!(
        policy::capacity_is_valid(capacity),
        "capacity {capacity} is zero or too large"
    );

    info!("running array script with capacity {capacity}");
    let mut vec = DynamicArray::with_capacity(capacity).context("Failed to create array")?;

    for i in 0..5 {
        vec.insert(0, i * 2).context("Failed to insert into array")?;
    }
    println!("{vec}");

    vec.insert(3, 42).context("Failed to insert into array")?;
    let values: Vec<String> = (0..vec.len()).map(|i| vec.get(i).to_string()).collect();
    println!("{}", values.join(" "));

    println!("Peeked {}", vec.peek());
    vec.push(84).context("Failed to push onto array")?;
    println!("{vec}");
    println!("Peeked {}", vec.peek());

    println!();

    for _ in 0..5 {
        let popped = vec.pop().context("Failed to pop value from array")?;
        println!("Popped: {popped}");
        println!("{vec}");
    }

    Ok(())
}

fn run_list() {
    info!("running linked list script");
    let mut list = DoublyLinkedList::new();
    println!("{list}");

    for (index, value) in [(0, 42), (0, 84), (2, 168), (1, 336)] {
        list.insert(index, value);
        println!("{list}");
    }

    println!();

    let value = list.remove(2);
    println!("Removed {value}");
    println!("{list}");

    println!();

    for i in 0..10 {
        list.push(i * 2);
        println!("{list}");
    }

    println!();

    let value = list.pop();
    println!("Popped {value}");
    println!("{list}");

    println!();

    println!("Peeked {}", list.peek());
    println!("{list}");

    println!();

    list.set(9, 12345);
    let values: Vec<String> = (0..list.len()).map(|i| list.get(i).to_string()).collect();
    println!("{}", values.join(" "));

    println!();

    for index in (0..list.len()).rev() {
        let value = list.get(index);
        println!("list contains {value}? {}", list.contains(value));
    }
    let value = 54321;
    println!("list contains {value}? {}", list.contains(value));

    println!();

    list.clear();
    println!("{list}");
}
