/// One element of the overlay, described declaratively. Styles are CSS
/// property/value pairs applied in order; assembly into the page happens in
/// [`crate::script`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<&'static str>,
    pub styles: Vec<(&'static str, String)>,
    /// Markup payload (set as inner HTML)
    pub markup: Option<String>,
    /// Plain-text payload (set as text content)
    pub text: Option<String>,
}

impl Element {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            styles: Vec::new(),
            markup: None,
            text: None,
        }
    }

    fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((property, value.into()));
        self
    }
}

/// The whole overlay: a positioned container holding the content span and
/// the dismiss button, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupView {
    /// Horizontal offset from the selection's left edge, in pixels
    pub anchor_offset_x: i32,
    pub container: Element,
    pub content: Element,
    pub dismiss: Element,
}

/// Build the overlay for one extracted display string.
pub fn popup(display: &str) -> PopupView {
    PopupView {
        anchor_offset_x: 50,
        container: container(),
        content: content(display),
        dismiss: dismiss_button(),
    }
}

fn container() -> Element {
    Element::new("div")
        .style("position", "absolute")
        .style("border", "2px solid black")
        .style("background-color", "white")
        .style("padding", "15px")
        .style("max-width", "500px")
        .style("z-index", "200")
}

fn content(display: &str) -> Element {
    let mut element = Element::new("span").style("font-size", "14px");
    element.markup = Some(rewrite_anchors(display));
    element
}

fn dismiss_button() -> Element {
    let mut element = Element::new("button")
        .style("display", "block")
        .style("margin-top", "10px");
    element.id = Some("close_button");
    element.text = Some("Close".to_string());
    element
}

/// Rewrite every anchor opening tag in provider markup so links stay
/// readable inside the popup and navigate in a new tab. The href and link
/// text pass through untouched.
pub fn rewrite_anchors(markup: &str) -> String {
    const PATCHED: &str = "<a style='color: black; cursor: pointer' target='_blank'";

    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(pos) = rest.find("<a") {
        let after = &rest[pos + 2..];
        // Only an anchor tag, not e.g. <article>
        let is_anchor = after
            .chars()
            .next()
            .is_none_or(|c| c.is_whitespace() || c == '>' || c == '/');

        out.push_str(&rest[..pos]);
        out.push_str(if is_anchor { PATCHED } else { "<a" });
        rest = after;
    }
    out.push_str(rest);
    out
}
