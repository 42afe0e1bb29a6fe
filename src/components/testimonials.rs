use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Nexia transformó nuestra operación logística. En seis meses redujimos \
                los costes un 18% sin perder calidad de servicio.",
        author: "Carmen Iglesias",
        role: "Directora de Operaciones, Grupo Ventia",
    },
    Testimonial {
        quote: "El equipo entendió nuestro negocio desde la primera reunión. La hoja de \
                ruta que diseñaron sigue guiando nuestra expansión.",
        author: "Javier Montoro",
        role: "CEO, Alimentaria del Sur",
    },
    Testimonial {
        quote: "Profesionales, cercanos y con resultados medibles. La auditoría de \
                procesos nos ahorró meses de trabajo interno.",
        author: "Lucía Ferrán",
        role: "CFO, TecnoBase",
    },
];

fn advance(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Cycles the testimonial panels; exactly one is visible at any time. With
/// a single testimonial nothing rotates, and the interval handle lives for
/// the page's lifetime (dropped only on unmount).
#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let current = use_state_eq(|| 0usize);

    {
        let current = current.clone();
        use_effect_with_deps(
            move |_| {
                let rotator = (TESTIMONIALS.len() > 1).then(|| {
                    let mut index = 0usize;
                    Interval::new(config::TESTIMONIAL_ROTATE_MS, move || {
                        index = advance(index, TESTIMONIALS.len());
                        current.set(index);
                    })
                });

                move || drop(rotator)
            },
            (),
        );
    }

    let panels = TESTIMONIALS
        .iter()
        .enumerate()
        .map(|(i, testimonial)| {
            let active = i == *current;
            html! {
                <div
                    class={classes!("testimonial-card", active.then(|| "active"))}
                    style={if active { "display: block;" } else { "display: none;" }}
                >
                    <p class="testimonial-quote">{ testimonial.quote }</p>
                    <div class="testimonial-author">
                        <span class="author-name">{ testimonial.author }</span>
                        <span class="author-role">{ testimonial.role }</span>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="testimonials-slider">
            { panels }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::advance;

    #[test]
    fn rotation_wraps_cyclically() {
        // Three panels: starting at 0, three ticks visit 1, 2 and wrap to 0.
        let mut index = 0;
        let mut seen = vec![index];
        for _ in 0..3 {
            index = advance(index, 3);
            seen.push(index);
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn single_panel_stays_put() {
        assert_eq!(advance(0, 1), 0);
    }
}
