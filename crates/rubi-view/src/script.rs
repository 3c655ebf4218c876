use crate::popup::{Element, PopupView};

/// Compile a popup view into a single script the host runs inside the page.
///
/// The overlay is anchored to the current text selection at run time, so the
/// position math lives in the emitted script rather than in the view. All
/// string payloads are embedded as JSON literals.
pub fn compile(view: &PopupView) -> String {
    let mut script = String::new();
    script.push_str("(function() {\n");
    script.push_str(
        "var rect = window.getSelection().getRangeAt(0).getBoundingClientRect();\n",
    );

    emit_element(&mut script, "popup", &view.container);
    script.push_str(&format!(
        "popup.style.left = rect.left + {} + \"px\";\n",
        view.anchor_offset_x
    ));
    script.push_str("popup.style.top = window.scrollY + rect.top + \"px\";\n");

    emit_element(&mut script, "content", &view.content);
    emit_element(&mut script, "button", &view.dismiss);

    script.push_str("document.body.appendChild(popup);\n");
    script.push_str("popup.appendChild(content);\n");
    script.push_str("popup.appendChild(button);\n");
    script.push_str("button.onclick = function() { popup.remove(); };\n");
    script.push_str("})();\n");
    script
}

fn emit_element(script: &mut String, var: &str, element: &Element) {
    script.push_str(&format!(
        "var {var} = document.createElement({});\n",
        literal(element.tag)
    ));
    if let Some(id) = element.id {
        script.push_str(&format!("{var}.id = {};\n", literal(id)));
    }
    for (property, value) in &element.styles {
        script.push_str(&format!(
            "{var}.style.setProperty({}, {});\n",
            literal(property),
            literal(value)
        ));
    }
    if let Some(markup) = &element.markup {
        script.push_str(&format!("{var}.innerHTML = {};\n", literal(markup)));
    }
    if let Some(text) = &element.text {
        script.push_str(&format!("{var}.textContent = {};\n", literal(text)));
    }
}

/// JSON string literal, valid as a JS string expression.
fn literal(value: &str) -> String {
    serde_json::to_string(value).expect("string serialization is infallible")
}
