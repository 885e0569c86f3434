// SPDX-License-Identifier: CC0-1.0

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::Read;
use tracing_subscriber::EnvFilter;

use shamir_demo::field::{Polynomial, interpolate};
use shamir_demo::sharing::{self, DEFAULT_PRIME, make_shares};
use shamir_demo::text::{self, share_metadata};

#[derive(Parser)]
#[clap(name = "shamir-demo")]
#[clap(version = "0.1.0")]
#[clap(about = "CLI tool to split and reconstruct secrets with Shamir's Secret Sharing.", long_about = None)]
struct Cli {
    /// Seed for the polynomial coefficients, for reproducible shares
    #[clap(long, global = true)]
    seed: Option<u64>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Splits a text secret into shares, one per line
    Split(SplitArgs),
    /// Reconstructs a text secret from all of its shares
    Combine(SharesArgs),
    /// Checks that a set of shares belongs together
    Validate(SharesArgs),
    /// Shares an integer secret in plain integer arithmetic and reconstructs it
    Polynomial(PolynomialArgs),
    /// Shares an integer secret modulo a prime and reconstructs it
    FiniteField(FiniteFieldArgs),
}

#[derive(Args)]
struct SplitArgs {
    /// The secret to split. Read from stdin if omitted
    secret: Option<String>,
    /// Number of shares, all of which are needed to reconstruct
    #[clap(short = 'n', long, env = "SHAMIR_SHARES", default_value_t = 3)]
    shares: usize,
    /// Field modulus, should be a prime larger than every character code
    #[clap(short, long, env = "SHAMIR_PRIME", default_value_t = DEFAULT_PRIME)]
    prime: i64,
}

#[derive(Args)]
struct SharesArgs {
    /// Share strings, as printed by `split`
    #[clap(required = true)]
    shares: Vec<String>,
}

#[derive(Args)]
struct PolynomialArgs {
    /// The integer secret
    #[clap(short, long, default_value_t = 1234, allow_negative_numbers = true)]
    secret: i64,
    /// Number of shares
    #[clap(short = 'n', long, default_value_t = 4)]
    shares: usize,
    /// Start of the sampled domain
    #[clap(long, default_value_t = -2.0, allow_negative_numbers = true)]
    x1: f64,
    /// End of the sampled domain
    #[clap(long, default_value_t = 2.0, allow_negative_numbers = true)]
    x2: f64,
    /// Number of samples printed for each curve
    #[clap(long, default_value_t = 8)]
    steps: usize,
}

#[derive(Args)]
struct FiniteFieldArgs {
    /// The integer secret, in [0, prime)
    #[clap(short, long, default_value_t = 1234)]
    secret: i64,
    /// Number of shares
    #[clap(short = 'n', long, env = "SHAMIR_SHARES", default_value_t = 3)]
    shares: usize,
    /// Field modulus
    #[clap(short, long, env = "SHAMIR_PRIME", default_value_t = DEFAULT_PRIME)]
    prime: i64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "shamir_demo=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    match cli.command {
        Commands::Split(args) => handle_split(args, rng.as_mut()),
        Commands::Combine(args) => handle_combine(args),
        Commands::Validate(args) => handle_validate(args),
        Commands::Polynomial(args) => handle_polynomial(args, rng.as_mut()),
        Commands::FiniteField(args) => handle_finite_field(args, rng.as_mut()),
    }
}

fn handle_split(args: SplitArgs, rng: &mut dyn RngCore) -> Result<()> {
    let secret = match args.secret {
        Some(secret) => secret,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read secret from stdin")?;
            // Drop the newline added by `echo` and most editors
            let trimmed = input.strip_suffix('\n').unwrap_or(&input);
            trimmed.strip_suffix('\r').unwrap_or(trimmed).to_string()
        }
    };

    if args.shares < 2 {
        bail!("At least two shares are required.");
    }

    let shares = shamir_demo::split_with_rng(&secret, args.shares, args.prime, rng)?;

    for share in shares {
        println!("{}", share);
    }

    Ok(())
}

fn handle_combine(args: SharesArgs) -> Result<()> {
    let secret = shamir_demo::combine(&args.shares)?;

    println!("{}", secret);

    Ok(())
}

fn handle_validate(args: SharesArgs) -> Result<()> {
    text::validate(&args.shares).context("Invalid share set")?;
    let metadata = share_metadata(&args.shares[0], 1)?;

    println!(
        "{} share(s) consistent, prime {}",
        args.shares.len(),
        metadata.prime
    );

    Ok(())
}

fn handle_polynomial(args: PolynomialArgs, rng: &mut dyn RngCore) -> Result<()> {
    let polynomial = Polynomial::random(args.secret, args.shares, rng)
        .context("Failed to generate polynomial")?;
    let shares = polynomial
        .shares()
        .context("Failed to sample polynomial")?;

    println!("{}", polynomial);
    println!("f(0) = {}", polynomial.evaluate(0)?);
    for (i, share) in shares.iter().enumerate() {
        println!("f({}) = {} - share {}", share.x, share.y, i + 1);
    }

    let recreated = interpolate(&shares).context("Failed to interpolate shares")?;
    let recreated_f0 = recreated.evaluate(0.0);
    let verdict = if recreated_f0.round() == args.secret as f64 {
        "OK"
    } else {
        "NOK"
    };
    println!(
        "secret from polynomial recreated based on shares: f(0) = {} ({})",
        recreated_f0, verdict
    );

    let original = shamir_demo::sample_curve(&polynomial, args.x1, args.x2, args.steps)?;
    let reconstructed = shamir_demo::sample_curve(&recreated, args.x1, args.x2, args.steps)?;

    println!();
    println!("{:>12} {:>20} {:>20}", "x", "f(x)", "recreated f(x)");
    for ((x, y), (_, recreated_y)) in original.into_iter().zip(reconstructed) {
        println!("{:>12.4} {:>20.4} {:>20.4}", x, y, recreated_y);
    }

    Ok(())
}

fn handle_finite_field(args: FiniteFieldArgs, rng: &mut dyn RngCore) -> Result<()> {
    match share_and_reconstruct(args.secret, args.shares, args.prime, rng) {
        Err(err) if args.prime != DEFAULT_PRIME => {
            eprintln!("Error: {:#}", err);
            eprintln!("Falling back to prime {}", DEFAULT_PRIME);
            share_and_reconstruct(args.secret, args.shares, DEFAULT_PRIME, rng)
        }
        result => result,
    }
}

fn share_and_reconstruct(
    secret: i64,
    number_of_shares: usize,
    prime: i64,
    rng: &mut dyn RngCore,
) -> Result<()> {
    let generated = make_shares(secret, number_of_shares, prime, rng)
        .with_context(|| format!("Failed to share secret modulo {}", prime))?;
    let recreated = sharing::reconstruct(&generated.shares, prime)
        .with_context(|| format!("Failed to reconstruct secret modulo {}", prime))?;

    println!("{}", generated.polynomial);
    println!("shares:");
    for share in &generated.shares {
        println!("x: {}\ty: {}", share.x, share.y);
    }
    println!("secret from reconstructed polynomial: f(0) = {}", recreated);

    Ok(())
}
