use maud::{html, Markup, PreEscaped, DOCTYPE};

// 16:9 slides, one per printed page.
const DECK_CSS: &str = r#"
body { margin: 0; background: #e5e7eb; font-family: system-ui, sans-serif; color: #111827; }
.slide { width: 1280px; height: 720px; margin: 24px auto; background: #fff; box-sizing: border-box;
         padding: 48px 64px; position: relative; overflow: hidden; page-break-after: always;
         box-shadow: 0 2px 8px rgba(0,0,0,.15); }
.slide-title { display: flex; flex-direction: column; justify-content: center; }
.slide-title h1 { font-size: 44px; margin: 0 0 24px; }
.slide-title .price { font-size: 32px; font-weight: 700; color: #1d4ed8; }
.slide-title .location { font-size: 24px; color: #4b5563; margin-top: 12px; }
.brand { position: absolute; bottom: 24px; right: 64px; font-size: 16px; color: #6b7280; }
.slide-listing h2 { font-size: 28px; margin: 0 0 16px; }
.details { border-collapse: collapse; font-size: 18px; margin-bottom: 16px; }
.details th { text-align: left; padding: 4px 24px 4px 0; color: #6b7280; font-weight: 500; }
.details td { padding: 4px 0; font-weight: 600; }
.description { font-size: 15px; line-height: 1.4; color: #374151; }
.gallery { display: flex; gap: 12px; margin-top: 16px; }
.gallery img { height: 200px; max-width: 380px; object-fit: cover; border-radius: 6px; }
.source { position: absolute; bottom: 24px; left: 64px; font-size: 12px; color: #9ca3af; }
@media print { body { background: #fff; } .slide { margin: 0; box-shadow: none; } }
"#;

pub fn deck_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(DECK_CSS)) }
            }
            body {
                (content)
            }
        }
    }
}
