use yew::prelude::*;

/// Inline line icons (lucide outlines) used across the public pages.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Building,
    Users,
    Award,
    Clock,
    Target,
    Eye,
    Gem,
    PlayCircle,
    Close,
}

enum Shape {
    Path(&'static str),
    Circle(u8, u8, u8),
    Rect(u8, u8, u8, u8),
    Polyline(&'static str),
    Polygon(&'static str),
}

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::Building => &[
                Shape::Rect(4, 2, 16, 20),
                Shape::Path("M9 22v-4h6v4"),
                Shape::Path("M8 6h.01M12 6h.01M16 6h.01M8 10h.01M12 10h.01M16 10h.01M8 14h.01M12 14h.01M16 14h.01"),
            ],
            Icon::Users => &[
                Shape::Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
                Shape::Circle(9, 7, 4),
                Shape::Path("M22 21v-2a4 4 0 0 0-3-3.87"),
                Shape::Path("M16 3.13a4 4 0 0 1 0 7.75"),
            ],
            Icon::Award => &[
                Shape::Circle(12, 8, 6),
                Shape::Path("M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"),
            ],
            Icon::Clock => &[
                Shape::Circle(12, 12, 10),
                Shape::Polyline("12 6 12 12 16 14"),
            ],
            Icon::Target => &[
                Shape::Circle(12, 12, 10),
                Shape::Circle(12, 12, 6),
                Shape::Circle(12, 12, 2),
            ],
            Icon::Eye => &[
                Shape::Path("M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"),
                Shape::Circle(12, 12, 3),
            ],
            Icon::Gem => &[
                Shape::Path("M6 3h12l4 6-10 13L2 9Z"),
                Shape::Path("M11 3 8 9l4 13 4-13-3-6"),
                Shape::Path("M2 9h20"),
            ],
            Icon::PlayCircle => &[
                Shape::Circle(12, 12, 10),
                Shape::Polygon("10 8 16 12 10 16 10 8"),
            ],
            Icon::Close => &[
                Shape::Path("M18 6 6 18"),
                Shape::Path("m6 6 12 12"),
            ],
        }
    }

    pub fn render(self, class: &'static str) -> Html {
        let shapes = self.shapes().iter().map(|shape| match *shape {
            Shape::Path(d) => html! { <path d={d} /> },
            Shape::Circle(cx, cy, r) => html! {
                <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
            },
            Shape::Rect(x, y, width, height) => html! {
                <rect
                    x={x.to_string()}
                    y={y.to_string()}
                    width={width.to_string()}
                    height={height.to_string()}
                    rx="2"
                    ry="2"
                />
            },
            Shape::Polyline(points) => html! { <polyline points={points} /> },
            Shape::Polygon(points) => html! { <polygon points={points} /> },
        });

        html! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class={class}
                aria-hidden="true"
            >
                { for shapes }
            </svg>
        }
    }
}
