/// Id of the overlay root; the document listener removes itself once it is gone.
pub(super) const OVERLAY_ROOT_ID: &str = "countdown-overlay";

/// Message posted back to Rust for every Escape press while the overlay is up.
pub(super) const ESCAPE_MESSAGE: &str = "escape";

/// Installs a document-level `keydown` listener for the overlay.
///
/// A previous listener left behind by an earlier overlay is replaced, and the
/// listener is removed as soon as the overlay root leaves the DOM.
pub(super) fn escape_listener_script(root_id: &str) -> String {
    format!(
        r#"(function() {{
                    const rootId = {root_id:?};
                    const previous = window.__campusCountdownKeydown;
                    if (previous) {{
                        document.removeEventListener("keydown", previous.onKey, true);
                        previous.observer.disconnect();
                    }}
                    const onKey = (event) => {{
                        if (event.key !== "Escape") {{
                            return;
                        }}
                        event.preventDefault();
                        dioxus.send({message:?});
                    }};
                    const teardown = () => {{
                        document.removeEventListener("keydown", onKey, true);
                        observer.disconnect();
                        if (window.__campusCountdownKeydown && window.__campusCountdownKeydown.onKey === onKey) {{
                            window.__campusCountdownKeydown = null;
                        }}
                    }};
                    const observer = new MutationObserver(() => {{
                        if (!document.getElementById(rootId)) {{
                            teardown();
                        }}
                    }});
                    observer.observe(document.body, {{ childList: true, subtree: true }});
                    window.__campusCountdownKeydown = {{ onKey, observer }};
                    document.addEventListener("keydown", onKey, true);
                    if (!document.getElementById(rootId)) {{
                        teardown();
                    }}
                }})();"#,
        root_id = root_id,
        message = ESCAPE_MESSAGE,
    )
}
