//! Same-origin wrapper around an externally hosted lab.

use std::sync::Arc;

use axum::{extract::State, response::Html};
use nexglab_locale::Key;

use crate::catalog::{self, LabAccess};
use crate::error::{GatewayError, GatewayResult};
use crate::extract::PageContext;
use crate::render::escape;
use crate::state::PortalState;

/// Device capabilities the embedded lab may request.
pub const FRAME_ALLOW: &str = "accelerometer; camera; encrypted-media; geolocation; gyroscope; \
                               microphone; midi; payment; usb; xr-spatial-tracking";

/// Sandbox grants for the embedded lab.
pub const FRAME_SANDBOX: &str =
    "allow-forms allow-modals allow-popups allow-presentation allow-same-origin allow-scripts";

/// Loading advisory: switch to the slow-load notice once the delay passes
/// without a load event, and to the failure notice on error.
fn loader_script(slow_after_ms: u64, slow: &str, unavailable: &str) -> String {
    format!(
        "<script>(function(){{\
         var frame=document.getElementById('lab-frame');\
         var status=document.getElementById('lab-status');\
         var loaded=false;\
         var timer=setTimeout(function(){{if(!loaded){{status.textContent={slow};status.className='alert';}}}},{slow_after_ms});\
         frame.addEventListener('load',function(){{loaded=true;clearTimeout(timer);status.hidden=true;frame.style.opacity=1;}});\
         frame.addEventListener('error',function(){{loaded=true;clearTimeout(timer);status.textContent={unavailable};status.className='alert';}});\
         }})();</script>",
        slow = js_string(slow),
        unavailable = js_string(unavailable),
    )
}

/// Double-quoted JavaScript string literal, safe inside a script element.
fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '<' => out.push_str("\\u003c"),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Rock mechanics lab embedded in an iframe.
pub async fn rmr_lab(
    State(state): State<Arc<PortalState>>,
    ctx: PageContext,
) -> GatewayResult<Html<String>> {
    let topic = catalog::DIB_TOPICS
        .iter()
        .find(|topic| matches!(topic.lab.access, LabAccess::Embedded { page } if page == catalog::RMR_LAB_PAGE))
        .ok_or_else(|| GatewayError::NotFound("no embedded lab at this path".to_string()))?;

    let labs = &state.config.labs;
    let page = ctx.page();
    let body = format!(
        "{back}<h1>{name}</h1>\
         <section class=\"lab-frame\">\
         <p id=\"lab-status\" role=\"status\">{loading}</p>\
         <iframe id=\"lab-frame\" src=\"{src}\" title=\"{name}\" style=\"opacity:0\" allow=\"{allow}\" sandbox=\"{sandbox}\"></iframe>\
         </section>{script}",
        back = page.back_link(&topic.path()),
        name = escape(topic.lab.name),
        loading = page.t(Key::LabLoading),
        src = escape(&topic.lab.url(labs)),
        allow = FRAME_ALLOW,
        sandbox = FRAME_SANDBOX,
        script = loader_script(
            labs.slow_load_after_ms,
            ctx.locale.text(Key::LabSlow),
            ctx.locale.text(Key::LabUnavailable),
        ),
    );

    Ok(page.render(topic.lab.name, &body))
}
