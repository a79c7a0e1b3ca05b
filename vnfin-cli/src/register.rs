use std::io::Write;

use vnfin_core::{AccessTier, VnConnector};

use crate::console::Console;

/// Best-effort access-key registration.
///
/// Skipped when no key is configured or the connector has no credential
/// capability. Any failure leaves the connector on the guest tier and is not
/// reported anywhere. The console is muted for the duration of the call.
pub async fn register_access_key<W: Write + Send>(
    connector: &dyn VnConnector,
    api_key: Option<&str>,
    console: &mut Console<W>,
) -> Option<AccessTier> {
    let key = api_key.filter(|k| !k.is_empty())?;
    let provider = connector.as_credential_provider()?;
    let mut quiet = console.silence();
    provider.register(key, &mut quiet).await.ok()
}
