use anyhow::anyhow;
use aq_core::{LookupController, LookupMode, Phase, QueryResult, Transport};
use log::info;
use url::Url;

/// Run one submission of mode `M` with `input` and return the decoded result.
///
/// Validation and service failures come back as errors carrying the same
/// text the browser shows in its banner.
pub async fn lookup<M: LookupMode, T: Transport>(
    base_url: &Url,
    input: M::Input,
    transport: &T,
) -> anyhow::Result<QueryResult> {
    let mut controller = LookupController::<M>::new(base_url.clone());
    controller.set_input(input);

    let phase = controller.submit(transport).await;
    info!("{} lookup finished in {:?}", M::MODE.name(), phase);

    match controller.phase() {
        Phase::Success(result) => Ok(result.clone()),
        Phase::Error(message) => Err(anyhow!("{}", message)),
        other => Err(anyhow!("lookup ended while {:?}", other.kind())),
    }
}
