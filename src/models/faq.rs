//! Frequently asked questions shown on the FAQ page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Faq {
    pub title: &'static str,
    pub description: &'static str,
}

pub static FAQS: &[Faq] = &[
    Faq {
        title: "How do I buy a comic?",
        description: "Open the comic you want, press \"Buy\" and complete the three checkout \
                      steps: personal details, delivery address and payment.",
    },
    Faq {
        title: "Which payment methods are accepted?",
        description: "We accept Visa, Mastercard and American Express credit cards.",
    },
    Faq {
        title: "How long does delivery take?",
        description: "Orders are shipped within 48 hours and usually arrive in 3 to 5 business days.",
    },
    Faq {
        title: "Can I cancel my order?",
        description: "Orders can be cancelled before they are shipped by contacting customer support.",
    },
    Faq {
        title: "Where does the comic information come from?",
        description: "Titles, descriptions, images and characters are provided by the Marvel catalog.",
    },
];
