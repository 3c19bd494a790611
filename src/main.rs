use avl_index::avl_tree::AvlSet;
use clap::Parser;
use log::{error, info};
use std::process;

/// Fills an avl set by stepping through the residues modulo `nums`, removes every odd element,
/// and checks what remains.
#[derive(Parser, Debug)]
#[command(name = "avl-check")]
struct Config {
    /// Modulus of the generated sequence. Must be even and at least 4.
    #[arg(long, default_value_t = 1_000_000)]
    nums: u64,

    /// Step of the generated sequence. Must be coprime with `nums`.
    #[arg(long, default_value_t = 37)]
    gap: u64,

    /// Below this modulus the invariant is checked after every operation and the final
    /// contents are printed.
    #[arg(long, default_value_t = 40)]
    small: u64,
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

fn validate(config: &Config) -> Result<(), String> {
    if config.nums < 4 || config.nums % 2 != 0 {
        return Err(format!("nums must be an even number of at least 4, got {}", config.nums));
    }
    if gcd(config.gap % config.nums, config.nums) != 1 {
        return Err(format!(
            "gap {} must be coprime with nums {}",
            config.gap, config.nums,
        ));
    }
    Ok(())
}

fn print_tree(set: &AvlSet<u64>) {
    if set.is_empty() {
        println!("Empty tree");
    } else {
        for element in set {
            println!("{}", element);
        }
    }
}

fn run(config: &Config) -> usize {
    let mut set = AvlSet::new();
    let mut failures = 0;
    let small = config.nums < config.small;

    let mut check = |set: &AvlSet<u64>| {
        if small {
            if let Err(err) = set.check_invariant() {
                error!("{}", err);
                failures += 1;
            }
        }
    };

    let gap = config.gap % config.nums;
    let mut i = gap;
    while i != 0 {
        set.insert(i);
        check(&set);
        i = (i + gap) % config.nums;
    }
    info!("inserted {} elements, height {}", set.len(), set.height());

    for i in (1..config.nums).step_by(2) {
        set.remove(&i);
        check(&set);
    }
    info!("removed odd elements, {} remain, height {}", set.len(), set.height());

    if small {
        print_tree(&set);
    }

    if set.find_min() != Ok(&2) || set.find_max() != Ok(&(config.nums - 2)) {
        error!("find_min or find_max error: {:?}, {:?}", set.find_min(), set.find_max());
        failures += 1;
    }
    for i in (2..config.nums).step_by(2) {
        if !set.contains(&i) {
            error!("missing even element {}", i);
            failures += 1;
        }
    }
    for i in (1..config.nums).step_by(2) {
        if set.contains(&i) {
            error!("found removed odd element {}", i);
            failures += 1;
        }
    }
    failures
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    if let Err(message) = validate(&config) {
        error!("{}", message);
        process::exit(2);
    }

    info!("checking avl set with {:?}", config);
    let failures = run(&config);
    if failures > 0 {
        error!("{} checks failed", failures);
        process::exit(1);
    }
    info!("all checks passed");
}
