use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub pre_title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            if let Some(pre_title) = &props.pre_title {
                <div class="pre-title">{ pre_title }</div>
            }
            <h2>{ &props.title }</h2>
            if let Some(subtitle) = &props.subtitle {
                <p>{ subtitle }</p>
            }
        </div>
    }
}
