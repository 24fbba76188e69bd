//! Example: commit to a blob of data, open it at several points and verify the
//! openings one by one and as a batch, on the BN254 curve.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --example commit_open_verify --release
//! ```

use std::time::Instant;

use kzg10::{Kzg, OpeningClaim, Polynomial};
use kzg10_algebra::ScalarField;
use kzg10_bn254::{Bn254, Fr};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

fn main() {
    // Initialize tracing
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    println!("=== KZG10 Commit / Open / Verify ===\n");

    let data = b"Constant-size commitments to polynomials and their applications";
    let max_degree = 1 << 7;

    println!("Configuration:");
    println!("  Curve: BN254");
    println!("  Max polynomial degree: {}", max_degree);
    println!("  Data length: {} bytes\n", data.len());

    // WARNING: a fresh OS-seeded setup is still single-party. Import a ceremony
    // SRS with `StructuredReferenceString::from_parts` in production.
    println!("Running trusted setup...");
    let start = Instant::now();
    let kzg = match Kzg::<Bn254>::setup(max_degree, &mut rand::rng()) {
        Ok(kzg) => kzg,
        Err(err) => {
            eprintln!("setup failed: {err}");
            std::process::exit(1);
        }
    };
    println!("✓ Setup completed in {:?}\n", start.elapsed());

    let poly = Polynomial::<Fr>::from_bytes(data);
    let commitment = match kzg.commit(&poly) {
        Ok(commitment) => commitment,
        Err(err) => {
            eprintln!("commit failed: {err}");
            std::process::exit(1);
        }
    };
    println!("Committed to a degree-{:?} polynomial", poly.degree());

    // Transcript-free demo: points and batch coefficients from a seeded RNG.
    let mut rng = SmallRng::seed_from_u64(42);
    let mut claims = Vec::new();
    for _ in 0..8 {
        let point = Fr::random(&mut rng);
        let (value, proof) = kzg
            .open(&poly, point)
            .expect("degree was checked by commit");
        claims.push(OpeningClaim {
            commitment,
            point,
            value,
            proof,
        });
    }

    println!("\nVerifying {} openings individually...", claims.len());
    let start = Instant::now();
    let all_valid = claims.iter().all(|claim| {
        kzg.verify(&claim.commitment, claim.point, claim.value, &claim.proof)
            .unwrap_or(false)
    });
    println!("  valid: {} ({:?})", all_valid, start.elapsed());

    println!("Verifying {} openings as a batch...", claims.len());
    let coefficients: Vec<Fr> = claims.iter().map(|_| Fr::random_nonzero(&mut rng)).collect();
    let start = Instant::now();
    let batch_valid = kzg.verify_batch(&claims, &coefficients).unwrap_or(false);
    println!("  valid: {} ({:?})", batch_valid, start.elapsed());

    println!("\nTampering with one claimed value...");
    claims[3].value += Fr::ONE;
    let tampered_valid = kzg.verify_batch(&claims, &coefficients).unwrap_or(false);
    println!("  valid: {}", tampered_valid);

    println!("\n=== Example completed ===");
}
