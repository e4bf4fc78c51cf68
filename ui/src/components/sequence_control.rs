use dioxus::prelude::*;

/// Range slider plus discrete skip buttons for stepping through months.
///
/// The slider covers `[0, len - 1]` with step 1; the buttons wrap around at
/// both ends (the wrap itself lives in `SequenceController`, this component
/// only reports intent).
#[component]
pub fn SequenceControl(
    index: usize,
    len: usize,
    on_retreat: EventHandler<()>,
    on_advance: EventHandler<()>,
    on_set: EventHandler<usize>,
) -> Element {
    let max = len.saturating_sub(1);

    rsx! {
        div { class: "sequence-control",
            button {
                r#type: "button",
                class: "sequence-control__skip",
                title: "Reverse",
                onclick: move |_| on_retreat.call(()),
                "<<"
            }
            input {
                r#type: "range",
                class: "sequence-control__slider",
                min: "0",
                max: "{max}",
                step: "1",
                value: "{index}",
                aria_label: "Month",
                oninput: move |evt| {
                    if let Ok(i) = evt.value().parse::<usize>() {
                        on_set.call(i);
                    }
                },
            }
            button {
                r#type: "button",
                class: "sequence-control__skip",
                title: "Forward",
                onclick: move |_| on_advance.call(()),
                ">>"
            }
        }
    }
}
