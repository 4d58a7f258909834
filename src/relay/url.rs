//! Forwarding URL construction.

use crate::relay::params::EmoteParams;

/// Path on the game server that receives relayed emote requests.
const JOIN_PATH: &str = "/join";

/// Assemble the outbound URL for a validated parameter set.
///
/// `server` is trusted verbatim as a base URL; every other value is
/// percent-encoded as a query component. Uid slots appear in ascending
/// order between `tc` and `emote_id`.
pub fn forwarding_url(params: &EmoteParams) -> String {
    let mut url = format!(
        "{}{}?tc={}",
        params.server,
        JOIN_PATH,
        urlencoding::encode(&params.tc)
    );

    for (slot, uid) in params.uids() {
        url.push_str(&format!("&uid{}={}", slot, urlencoding::encode(uid)));
    }

    url.push_str(&format!(
        "&emote_id={}",
        urlencoding::encode(&params.emote_id)
    ));
    url
}
