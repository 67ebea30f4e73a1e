use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub rating: u32,
    #[prop_or(5)]
    pub max: u32,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    let stars = (0..props.max).map(|i| {
        let class = if i < props.rating { "star filled" } else { "star" };
        html! { <span class={class} aria-hidden="true">{"★"}</span> }
    });

    html! {
        <span class="star-rating">
            <style>
                {r#"
                .star-rating {
                    display: inline-flex;
                    gap: 0.1rem;
                }
                .star {
                    color: #d6d9df;
                    font-size: 0.95rem;
                }
                .star.filled {
                    color: #d9a514;
                }
                "#}
            </style>
            { for stars }
        </span>
    }
}
