use yew::prelude::*;

const PILLARS: [(&str, &str); 3] = [
    (
        "Quality Guarantee",
        "Every product undergoes rigorous testing to ensure it meets our high standards for durability, weather resistance, and ease of use.",
    ),
    (
        "Our Values",
        "We are driven by innovation, a love for the outdoors, and a desire to make nature accessible and comfortable for everyone.",
    ),
    (
        "Customer-Centric",
        "Your adventure is our priority. We provide exceptional support and listen to our community to continuously improve our products.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <h2>{"Our Story"}</h2>
            <p class="about__story">
                {"Founded in the heart of China's manufacturing hub, TentCharged was born from a passion for exploration and a commitment to quality. We believe that the best adventures start with reliable gear. That's why we dedicate ourselves to designing and producing high-quality tents and outdoor shelters that you can trust, no matter where your journey takes you."}
            </p>
            <div class="about__pillars">
                { for PILLARS.iter().map(|&(title, body)| html! {
                    <div key={title} class="about__pillar">
                        <h3>{ title }</h3>
                        <p>{ body }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
