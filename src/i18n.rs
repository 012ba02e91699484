//! Bilingual copy for the page.
//!
//! Strings are looked up by the `data-i18n` key written on each element in
//! `index.html`. Structured content (services, testimonials) carries both
//! languages per record.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    /// Value for `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Label on the switcher button: the language you would switch to.
    pub fn switch_label(self) -> &'static str {
        match self {
            Language::En => "ES",
            Language::Es => "EN",
        }
    }

    /// Language name used in the idea-generation instruction.
    pub fn prompt_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }
}

/// A string in both languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bi {
    pub en: &'static str,
    pub es: &'static str,
}

impl Bi {
    #[inline]
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Es => self.es,
        }
    }
}

const fn bi(en: &'static str, es: &'static str) -> Bi {
    Bi { en, es }
}

static STRINGS: &[(&str, Bi)] = &[
    ("navServices", bi("Services", "Servicios")),
    ("navAbout", bi("About", "Nosotros")),
    ("navContact", bi("Contact", "Contacto")),
    ("heroLine2", bi("Systems for Digital Recognition", "Sistemas para Reconocimiento Digital")),
    (
        "heroSubheadingBefore",
        bi("We build beautiful, high-performance ", "Construimos sitios web y sistemas "),
    ),
    (
        "heroSubheadingAfter",
        bi(
            " websites and systems that define your digital presence.",
            ", hermosos y de alto rendimiento que definen tu presencia digital.",
        ),
    ),
    ("heroInteractHint", bi("(hover your cursor or touch the screen)", "(pasa el cursor o toca la pantalla)")),
    ("servicesTitle", bi("Services", "Servicios")),
    ("aboutTitle", bi("About Us", "Nosotros")),
    (
        "aboutP1",
        bi(
            "We are an emerging brand founded in Mexico, consisting of developers passionate about building digital experiences that are both functional and beautiful. Our philosophy merges design principles with the precision and logic of code.",
            "Somos una marca emergente fundada en México, integrada por desarrolladores apasionados por crear experiencias digitales funcionales y hermosas. Nuestra filosofía fusiona los principios del diseño con la precisión y lógica del código.",
        ),
    ),
    (
        "aboutP2",
        bi(
            "The result is clean, impactful, and built to last.",
            "El resultado es limpio, impactante y construido para durar.",
        ),
    ),
    ("dragMe", bi("(drag us)", "(arrástranos)")),
    ("showcaseTitle", bi("Client Showcase", "Casos de Éxito")),
    ("showcasePrev", bi("Previous testimonial", "Testimonio anterior")),
    ("showcaseNext", bi("Next testimonial", "Siguiente testimonio")),
    ("ideaTitle", bi("Spark an Idea", "Genera una Idea")),
    (
        "ideaSubheading",
        bi(
            "Not sure where to start? Let our AI brainstorm for you.",
            "¿No estás seguro por dónde empezar? Deja que nuestra IA piense por ti.",
        ),
    ),
    ("ideaBizTypePlaceholder", bi("e.g., Pizzeria, Coffee Shop...", "Ej. Pizzería, Cafetería...")),
    ("ideaGoalPlaceholder", bi("e.g., Get more online orders...", "Ej. Conseguir más pedidos online...")),
    ("ideaButton", bi("Generate Ideas", "Generar Ideas")),
    ("ideaLoading", bi("Generating...", "Generando...")),
    ("ideaResultsTitle", bi("Here are a few ideas:", "Aquí tienes algunas ideas:")),
    (
        "ideaCta",
        bi(
            "Ready to bring this to life? We can build that.",
            "¿Listo para darle vida a esto? Podemos construirlo.",
        ),
    ),
    ("ideaValidationError", bi("Please fill out both fields.", "Por favor, rellena ambos campos.")),
    (
        "ideaServiceError",
        bi(
            "Sorry, we couldn't generate ideas at this moment. Please try again later.",
            "Lo sentimos, no pudimos generar ideas en este momento. Inténtalo de nuevo más tarde.",
        ),
    ),
    ("contactTitle", bi("Get In Touch", "Ponte en Contacto")),
    (
        "contactSubheading",
        bi("Have a project in mind? Let's talk.", "¿Tienes un proyecto en mente? Hablemos."),
    ),
    ("contactWhatsapp", bi("Book a call!", "Agenda una llamada!")),
    ("contactEmail", bi("Send an Email", "Enviar un Email")),
    ("footerText", bi("Kvadra. All rights reserved.", "Kvadra. Todos los derechos reservados.")),
    ("modalClose", bi("Close modal", "Cerrar modal")),
    ("learnMore", bi("Learn More", "Saber Más")),
];

/// Look up a display string. Unknown keys return `None` so the markup's
/// fallback text stays in place.
pub fn text(key: &str, lang: Language) -> Option<&'static str> {
    STRINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, s)| s.get(lang))
}

/// Word in the hero subheading that gets the glitch effect.
pub fn coded_word(lang: Language) -> &'static str {
    match lang {
        Language::En => "coded",
        Language::Es => "codificados",
    }
}

/// Rotating third line of the hero heading.
pub fn tagline_options(lang: Language) -> [&'static str; 3] {
    match lang {
        Language::En => ["Creative Development", "User-Centric Design", "Performance Driven"],
        Language::Es => [
            "Desarrollo Creativo",
            "Diseño Centrado en Usuario",
            "Rendimiento Excepcional",
        ],
    }
}

pub struct Service {
    pub id: &'static str,
    pub title: Bi,
    pub description: Bi,
    pub tags: [Bi; 3],
}

pub static SERVICES: [Service; 5] = [
    Service {
        id: "seo-digital-strategy",
        title: bi("SEO & Digital Strategy", "SEO y Estrategia Digital"),
        description: bi(
            "We help your restaurant or local business get discovered. Our digital strategy focuses on what matters: appearing in local searches, attracting nearby customers, and building a strong online reputation. We manage your online presence so you can focus on running your business.",
            "Ayudamos a que tu restaurante o negocio local sea descubierto. Nuestra estrategia digital se enfoca en lo que importa: aparecer en búsquedas locales, atraer clientes cercanos y construir una sólida reputación en línea. Gestionamos tu presencia en internet para que puedas concentrarte en tu negocio.",
        ),
        tags: [
            bi("Local SEO", "SEO Local"),
            bi("Analytics", "Analíticas"),
            bi("Content Strategy", "Estrategia de Contenido"),
        ],
    },
    Service {
        id: "enterprise-web-systems",
        title: bi("Custom Business Systems", "Sistemas de Negocio a Medida"),
        description: bi(
            "We design and build custom systems to streamline your business operations. Whether it's an innovative database to manage inventory, a booking system for your restaurant, or a client portal, we create secure and efficient solutions tailored to your specific needs.",
            "Diseñamos y construimos sistemas a medida para optimizar las operaciones de tu negocio. Ya sea una base de datos innovadora para gestionar inventario, un sistema de reservas para tu restaurante o un portal para clientes, creamos soluciones seguras y eficientes adaptadas a tus necesidades específicas.",
        ),
        tags: [
            bi("Automation", "Automatización"),
            bi("Databases", "Bases de Datos"),
            bi("CRM", "CRM"),
        ],
    },
    Service {
        id: "custom-ui-ux-design",
        title: bi("Custom Website Design", "Diseño Web Personalizado"),
        description: bi(
            "We craft beautiful, user-friendly websites that make a great first impression. For restaurants, we design intuitive online menus and seamless ordering experiences. For businesses, we create professional sites that clearly communicate your value and make it easy for customers to connect with you.",
            "Creamos sitios web hermosos y fáciles de usar que causan una excelente primera impresión. Para restaurantes, diseñamos menús en línea intuitivos y experiencias de pedido fluidas. Para negocios, creamos sitios profesionales que comunican claramente tu valor y facilitan el contacto con los clientes.",
        ),
        tags: [
            bi("UI/UX", "UI/UX"),
            bi("Web Development", "Desarrollo Web"),
            bi("Responsive Design", "Diseño Responsivo"),
        ],
    },
    Service {
        id: "brand-identity",
        title: bi("Brand Identity", "Identidad de Marca"),
        description: bi(
            "Your brand is your story. We help you create a memorable identity, from a unique logo to a consistent look and feel across your website and social media. We ensure your business looks professional and stands out, helping you connect with your ideal customers.",
            "Tu marca es tu historia. Te ayudamos a crear una identidad memorable, desde un logotipo único hasta una apariencia coherente en tu sitio web y redes sociales. Nos aseguramos de que tu negocio se vea profesional y se destaque, ayudándote a conectar con tus clientes ideales.",
        ),
        tags: [
            bi("Logo Design", "Diseño de Logo"),
            bi("Visual System", "Sistema Visual"),
            bi("Strategy", "Estrategia"),
        ],
    },
    Service {
        id: "performance-optimization",
        title: bi("Performance Optimization", "Optimización de Rendimiento"),
        description: bi(
            "A fast website is crucial. We make sure your site loads quickly on all devices, so you don't lose customers due to slow speeds. A faster site improves user experience, helps with search engine rankings, and keeps your visitors engaged.",
            "Un sitio web rápido es crucial. Nos aseguramos de que tu página cargue velozmente en todos los dispositivos, para que no pierdas clientes por lentitud. Un sitio más rápido mejora la experiencia del usuario, ayuda en el posicionamiento en buscadores y mantiene a tus visitantes interesados.",
        ),
        tags: [
            bi("Core Web Vitals", "Core Web Vitals"),
            bi("Caching", "Caché"),
            bi("CDN", "CDN"),
        ],
    },
];

pub struct Client {
    pub name: &'static str,
    pub role: Bi,
    pub quote: Bi,
    pub logo: &'static str,
}

pub static CLIENTS: [Client; 3] = [
    Client {
        name: "KOR Activewear",
        role: bi("Owner", "Propietario"),
        quote: bi(
            "Kvadra created the whole website and management system for our brand, they implemented an interactive interface to change and edit our website in real time.",
            "Kvadra creó todo el sitio web y el sistema de gestión para nuestra marca, implementaron una interfaz interactiva para cambiar y editar nuestro sitio web en tiempo real.",
        ),
        logo: "🍽️",
    },
    Client {
        name: "FOCCA Restaurant",
        role: bi("Founder", "Fundadores"),
        quote: bi(
            "Working with them with our brand website was amazing and incredibly fast, before we even made a call they already had a working mockup for the website.",
            "Trabajar con ellos en el sitio web de nuestra marca fue increíble e increíblemente rápido, antes de que siquiera hiciéramos una llamada, ya tenían una maqueta funcional del sitio web.",
        ),
        logo: "🌿",
    },
    Client {
        name: "Innovate Logistics",
        role: bi("Operations Manager", "Gerente de Operaciones"),
        quote: bi(
            "The custom inventory management system they developed is a game-changer. It has saved us countless hours and reduced errors significantly. Highly recommended.",
            "El sistema de gestión de inventario personalizado que desarrollaron cambió las reglas del juego. Nos ha ahorrado incontables horas y ha reducido los errores significativamente. Muy recomendados.",
        ),
        logo: "📦",
    },
];

/// Three-digit ordinal shown before each service title, e.g. `(001)`.
pub fn service_number(index: usize) -> String {
    format!("({:03})", index + 1)
}
