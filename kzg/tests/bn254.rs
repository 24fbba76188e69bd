use kzg10::{
    Commitment, EvaluationClaim, Kzg, KzgError, OpeningClaim, OpeningProof, Polynomial,
    SetupAuthority, StructuredReferenceString, VerifierKey, commit, open, verify,
};
use kzg10_algebra::{CurveGroup, ScalarField};
use kzg10_bn254::{Bn254, Fr, G1, G2};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn setup(max_degree: usize) -> StructuredReferenceString<Bn254> {
    SetupAuthority::<Bn254>::generate_deterministic(max_degree, 2024).unwrap()
}

#[test]
fn prover_and_verifier_hold_disjoint_keys() {
    let mut rng = SmallRng::seed_from_u64(1);
    let srs = setup(32);
    let (pk, vk) = (srs.prover_key().clone(), *srs.verifier_key());
    drop(srs);

    let poly = Polynomial::random(32, &mut rng);
    let point = Fr::random(&mut rng);
    let commitment = commit(&pk, &poly).unwrap();
    let (value, proof) = open(&pk, &poly, point).unwrap();

    assert_eq!(value, poly.evaluate(point));
    assert!(verify(&vk, &commitment, point, value, &proof).unwrap());
    assert!(!verify(&vk, &commitment, point, value.double(), &proof).unwrap());
}

#[test]
fn scenario_on_bn254() {
    let srs = setup(3);
    // p(x) = 3x^2 + 2x + 1
    let poly = Polynomial::new(vec![Fr::new(1), Fr::new(2), Fr::new(3)]);
    let point = Fr::new(5);

    let commitment = commit(srs.prover_key(), &poly).unwrap();
    let (value, proof) = open(srs.prover_key(), &poly, point).unwrap();
    assert_eq!(value, Fr::new(86));
    assert!(verify(srs.verifier_key(), &commitment, point, value, &proof).unwrap());

    let four = Polynomial::new(vec![Fr::ONE; 5]);
    assert_eq!(
        commit(srs.prover_key(), &four),
        Err(KzgError::DegreeTooLarge { degree: 4, max: 3 })
    );
}

#[test]
fn generated_srs_is_well_formed() {
    let mut rng = rand_chacha_rng();
    let srs = SetupAuthority::<Bn254>::generate(16, &mut rng).unwrap();
    assert_eq!(srs.max_degree(), 16);
    assert_eq!(srs.prover_key().powers_of_s()[0], G1::generator());
    assert_eq!(srs.verifier_key().g2(), G2::generator());
    assert!(srs.verify_powers(&mut SmallRng::seed_from_u64(2)));

    let (powers, g2, s_g2) = srs.clone().into_parts();
    assert_eq!(StructuredReferenceString::from_parts(powers, g2, s_g2), Ok(srs));
}

#[test]
fn from_parts_rejects_foreign_secret() {
    let (powers, g2, _) = setup(4).into_parts();
    let (_, _, other_s_g2) = SetupAuthority::<Bn254>::generate_deterministic(4, 7)
        .unwrap()
        .into_parts();
    assert!(matches!(
        StructuredReferenceString::<Bn254>::from_parts(powers, g2, other_s_g2),
        Err(KzgError::MalformedInput(_))
    ));
}

#[test]
fn serde_roundtrip_preserves_equality() {
    let mut rng = SmallRng::seed_from_u64(3);
    let kzg = Kzg::new(setup(8));
    let poly = Polynomial::random(8, &mut rng);
    let point = Fr::random(&mut rng);
    let (value, proof) = kzg.open(&poly, point).unwrap();
    let claim = OpeningClaim {
        commitment: kzg.commit(&poly).unwrap(),
        point,
        value,
        proof,
    };

    let json = serde_json::to_string(&claim).unwrap();
    let decoded: OpeningClaim<Bn254> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, claim);
    assert!(
        kzg.verify(&decoded.commitment, decoded.point, decoded.value, &decoded.proof)
            .unwrap()
    );

    let json = serde_json::to_string(kzg.srs()).unwrap();
    let decoded: StructuredReferenceString<Bn254> = serde_json::from_str(&json).unwrap();
    assert_eq!(&decoded, kzg.srs());

    let json = serde_json::to_string(kzg.srs().verifier_key()).unwrap();
    let decoded: VerifierKey<Bn254> = serde_json::from_str(&json).unwrap();
    assert_eq!(&decoded, kzg.srs().verifier_key());
}

#[test]
fn decoding_rejects_off_curve_points() {
    let garbage = serde_json::to_string(&vec![0xffu8; 32]).unwrap();
    assert!(serde_json::from_str::<Commitment<Bn254>>(&garbage).is_err());
    assert!(serde_json::from_str::<OpeningProof<Bn254>>(&garbage).is_err());

    let short = serde_json::to_string(&vec![0u8; 31]).unwrap();
    assert!(serde_json::from_str::<Commitment<Bn254>>(&short).is_err());
}

#[test]
fn batch_layouts_agree_on_bn254() {
    let mut rng = SmallRng::seed_from_u64(4);
    let kzg = Kzg::new(setup(6));
    let point = Fr::random(&mut rng);
    let polys: Vec<Polynomial<Fr>> = (0..4).map(|_| Polynomial::random(6, &mut rng)).collect();
    let commitments = kzg.batch_commit(&polys).unwrap();
    let coefficients: Vec<Fr> = (0..4).map(|_| Fr::random_nonzero(&mut rng)).collect();

    let mut at_point = Vec::new();
    let mut general = Vec::new();
    for (poly, commitment) in polys.iter().zip(commitments) {
        let (value, proof) = kzg.open(poly, point).unwrap();
        at_point.push(EvaluationClaim {
            commitment,
            value,
            proof,
        });
        general.push(OpeningClaim {
            commitment,
            point,
            value,
            proof,
        });
    }

    assert!(
        kzg.verify_batch_same_point(point, &at_point, &coefficients)
            .unwrap()
    );
    assert!(kzg.verify_batch(&general, &coefficients).unwrap());

    at_point[1].proof = OpeningProof::new(at_point[1].proof.point().double());
    general[1].proof = at_point[1].proof;
    assert!(
        !kzg.verify_batch_same_point(point, &at_point, &coefficients)
            .unwrap()
    );
    assert!(!kzg.verify_batch(&general, &coefficients).unwrap());
}

fn rand_chacha_rng() -> rand_chacha::ChaCha20Rng {
    rand_chacha::ChaCha20Rng::seed_from_u64(99)
}
