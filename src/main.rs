use k256::{ProjectivePoint, Scalar};
use pedersen_vss::{is_valid, open, scalar_to_hex, share_secret, VssError, VssParams};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    pub threshold: usize,
    pub num_parties: usize,
}

fn run(parameters: &Parameters) -> Result<(), VssError> {
    let params = VssParams::<ProjectivePoint>::nothing_up_my_sleeve()?;
    info!(h = %params.to_hex()?, "using derived second generator");

    let indices: Vec<Scalar> = (1..=parameters.num_parties as u64)
        .map(Scalar::from)
        .collect();
    let secret = Scalar::from(42u64);

    let (shares, commitment) = share_secret(&params, &indices, secret, parameters.threshold)?;
    info!(commitment = %commitment.to_hex()?, "published commitment");

    for share in &shares {
        let valid = is_valid(&params, &commitment, share);
        info!(index = %scalar_to_hex(share.index()), valid, "checked share");
    }

    let opened = open(&shares[..parameters.threshold])?;
    info!(
        secret = %scalar_to_hex(&opened),
        matches = opened == secret,
        "opened secret from {} shares",
        parameters.threshold
    );
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pedersen_vss=info".into()),
        )
        .init();

    // Define the parameters for the sharing
    let parameters = Parameters {
        threshold: 3,
        num_parties: 5,
    };

    match run(&parameters) {
        Ok(()) => info!("sharing round successful"),
        Err(e) => error!("sharing round failed: {}", e),
    }
}
