//! Page shown in place of the whole dashboard when no backend location is configured.

use maud::{html, Markup, DOCTYPE};

use crate::config::{DEFAULT_CONFIG_PATH, ENV_BACKEND_URL};

pub const TITLE: &str = "Missing backend URL";

pub fn page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (TITLE) " - Pressroom Admin" }
                link rel="stylesheet" href=(crate::layout::STYLESHEET);
            }
            body {
                main.container style="margin-top: 3rem" {
                    h1 { (TITLE) }
                    p.lead {
                        "The dashboard needs to know where the backend API lives before it can start."
                    }
                    ol {
                        li {
                            "Set " code { (ENV_BACKEND_URL) } " in the environment or in a "
                            code { ".env" } " file, for example "
                            code { (ENV_BACKEND_URL) "=http://localhost:3001" } "."
                        }
                        li {
                            "Or add a " code { "[backend]" } " section with a " code { "url" }
                            " key to " code { (DEFAULT_CONFIG_PATH) } "."
                        }
                        li { "Restart the server." }
                    }
                }
            }
        }
    }
}
