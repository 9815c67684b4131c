use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TagTone {
    /// Small muted chip, used for project tech stacks.
    #[default]
    Neutral,
    /// Large bold chip, used for interests.
    Accent,
}

#[component]
pub fn Tag(label: String, #[props(default)] tone: TagTone) -> Element {
    rsx! {
        span {
            class: match tone {
                TagTone::Neutral => "tag",
                TagTone::Accent => "tag tag-accent",
            },
            "{label}"
        }
    }
}
