/// Smooth-scroll the element with `id` into view, if present.
pub(crate) fn scroll_into_view_script(id: &str) -> String {
    format!("document.getElementById({id:?})?.scrollIntoView({{ behavior: 'smooth' }});")
}

pub(crate) fn focus_script(id: &str) -> String {
    format!("document.getElementById({id:?})?.focus();")
}

/// Streams `window.scrollY` back to Rust on every scroll, starting with the current offset.
pub(crate) const SCROLL_LISTENER_SCRIPT: &str = r"(function() {
    const report = () => dioxus.send(window.scrollY || 0);
    window.addEventListener('scroll', report, { passive: true });
    report();
})();";
