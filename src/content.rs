//! Hard-coded copy, menus and photographs of the site.
//!
//! Photographs are hot-linked from Pexels; nothing here is fetched or cached
//! at build time.

use crate::showcase::{Caption, CaptionRole};
use std::fmt;

/// Pexels photo URL at the size every section uses.
macro_rules! pexels {
    ($id:literal) => {
        concat!(
            "https://images.pexels.com/photos/",
            $id,
            "/pexels-photo-",
            $id,
            ".jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"
        )
    };
}

/// Price in euro cents, shown as `€12.95`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(pub u32);

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "€{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSlide {
    pub photo: Photo,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dish {
    pub name: &'static str,
    pub description: &'static str,
    pub price: Price,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    /// Drinks are listed without a description.
    pub description: Option<&'static str>,
    pub price: Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSection {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

const fn item(name: &'static str, description: &'static str, cents: u32) -> MenuItem {
    MenuItem {
        name,
        description: Some(description),
        price: Price(cents),
    }
}

const fn drink(name: &'static str, cents: u32) -> MenuItem {
    MenuItem {
        name,
        description: None,
        price: Price(cents),
    }
}

const fn photo(src: &'static str, alt: &'static str) -> Photo {
    Photo { src, alt }
}

const fn slide(src: &'static str, alt: &'static str, caption: &'static str) -> CarouselSlide {
    CarouselSlide {
        photo: Photo { src, alt },
        caption,
    }
}

// =========================================================================
// Navigation and hero
// =========================================================================

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Inicio", target: "home" },
    NavLink { label: "Nosotros", target: "about" },
    NavLink { label: "Menú", target: "menu" },
    NavLink { label: "Galería", target: "gallery" },
    NavLink { label: "Contacto", target: "contact" },
];

pub const NAV_CTA: NavLink = NavLink {
    label: "Reserva",
    target: "contact",
};

pub const HERO_TITLE: &str = "Auténtica Cocina Italiana";
pub const HERO_SUBTITLE: &str = "Sabores tradicionales con un toque moderno en el corazón de la ciudad";
pub const HERO_MENU_BUTTON: &str = "Nuestro Menú";
pub const HERO_BOOK_BUTTON: &str = "Reservar Mesa";
pub const HERO_IMAGE: &str = pexels!("1566837");

// =========================================================================
// About
// =========================================================================

pub const ABOUT_LABEL: &str = "Nuestra Historia";
pub const ABOUT_TITLE: &str = "Tradición Italiana desde 1985";

/// About copy, rendered from markdown.
pub const ABOUT_MARKDOWN: &str = "\
Fundado por la familia Rossi hace más de tres décadas, **Bella Italia** ha \
sido un referente de la auténtica cocina italiana en la ciudad. Nuestras \
recetas han pasado de generación en generación, conservando los sabores \
tradicionales que caracterizan nuestra gastronomía.

Utilizamos ingredientes frescos y de temporada, muchos de ellos importados \
directamente de Italia, para garantizar la autenticidad de cada plato. \
Nuestro chef ejecutivo, *Marco Bianchi*, combina técnicas tradicionales con \
toques modernos para crear una experiencia gastronómica única.
";

pub const STATS: [Stat; 3] = [
    Stat { value: "35+", label: "Años de Tradición" },
    Stat { value: "50+", label: "Platos Únicos" },
    Stat { value: "20+", label: "Vinos Seleccionados" },
];

// =========================================================================
// Menu
// =========================================================================

pub const MENU_LABEL: &str = "Nuestros Platos";
pub const MENU_TITLE: &str = "Menú Seleccionado";
pub const MENU_INTRO: &str = "Descubre nuestra selección de platos tradicionales italianos elaborados con ingredientes frescos y de la mejor calidad.";
pub const MENU_BUTTON: &str = "Ver Menú Completo";

pub const MENU_PREVIEW: [Dish; 6] = [
    Dish {
        name: "Pizza Margherita",
        description: "Tomate, mozzarella, albahaca fresca y aceite de oliva",
        price: Price(1295),
        image: pexels!("2147491"),
    },
    Dish {
        name: "Pasta Carbonara",
        description: "Espaguetis, huevo, panceta, pecorino romano y pimienta negra",
        price: Price(1450),
        image: pexels!("5175537"),
    },
    Dish {
        name: "Risotto ai Funghi",
        description: "Arroz arborio, setas silvestres, caldo de verduras y parmesano",
        price: Price(1695),
        image: pexels!("6287525"),
    },
    Dish {
        name: "Lasagna Classica",
        description: "Capas de pasta, ragú boloñesa, bechamel y queso rallado",
        price: Price(1575),
        image: pexels!("5949903"),
    },
    Dish {
        name: "Tiramisu",
        description: "Bizcochos de soletilla, café, mascarpone y cacao en polvo",
        price: Price(850),
        image: pexels!("6880219"),
    },
    Dish {
        name: "Carpaccio di Manzo",
        description: "Finas láminas de ternera, rúcula, parmesano y aceite de trufa",
        price: Price(1725),
        image: "https://images.pexels.com/photos/20807274/pexels-photo-20807274/free-photo-of-comida-plato-italiano-restaurante.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
];

pub const FULL_MENU_TITLE: &str = "Menú Completo";
pub const FULL_MENU_NOTE: &str = "Si tiene alguna alergia o restricción alimentaria, por favor infórmenos.";
pub const CLOSE_LABEL: &str = "Cerrar";

pub const FULL_MENU: [MenuSection; 4] = [
    MenuSection {
        title: "Entrantes",
        items: &[
            item("Bruschetta", "Pan tostado con tomate, albahaca y aceite de oliva", 750),
            item("Calamari Fritti", "Calamares fritos con salsa de limón", 995),
            item("Carpaccio di Manzo", "Finas láminas de ternera con rúcula y parmesano", 1250),
            item("Insalata Caprese", "Tomate, mozzarella fresca y albahaca", 895),
            item("Antipasto Misto", "Selección de embutidos y quesos italianos", 1450),
        ],
    },
    MenuSection {
        title: "Pastas",
        items: &[
            item("Spaghetti alla Carbonara", "Espaguetis con huevo, panceta y queso pecorino", 1350),
            item("Pappardelle al Ragù", "Pappardelle con ragú de ternera a fuego lento", 1495),
            item("Ravioli di Ricotta", "Raviolis rellenos de ricotta y espinacas", 1395),
            item("Linguine allo Scoglio", "Linguini con mariscos variados", 1850),
            item("Lasagna alla Bolognese", "Lasaña tradicional con bechamel y ragú", 1550),
        ],
    },
    MenuSection {
        title: "Pizzas",
        items: &[
            item("Margherita", "Tomate, mozzarella y albahaca", 1095),
            item("Diavola", "Tomate, mozzarella y salami picante", 1295),
            item("Quattro Formaggi", "Mozzarella, gorgonzola, parmesano y fontina", 1395),
            item("Prosciutto e Funghi", "Tomate, mozzarella, jamón y champiñones", 1450),
            item("Capricciosa", "Tomate, mozzarella, champiñones, alcachofas, aceitunas y jamón", 1595),
        ],
    },
    MenuSection {
        title: "Postres",
        items: &[
            item("Tiramisù", "El clásico postre italiano con café y mascarpone", 750),
            item("Panna Cotta", "Crema cocida con coulis de frutos rojos", 695),
            item("Cannoli Siciliani", "Cannoli rellenos de ricotta y pistachos", 750),
            item("Gelato Artigianale", "Selección de helados italianos (3 bolas)", 650),
            item("Affogato", "Helado de vainilla con café espresso", 595),
        ],
    },
];

pub const DRINKS_TITLE: &str = "Bebidas";

pub const DRINKS: [MenuSection; 2] = [
    MenuSection {
        title: "Vinos",
        items: &[
            drink("Chianti Classico", 2800),
            drink("Barolo", 4500),
            drink("Pinot Grigio", 2400),
            drink("Prosecco", 2600),
        ],
    },
    MenuSection {
        title: "Otras Bebidas",
        items: &[
            drink("Agua mineral", 250),
            drink("Refrescos", 300),
            drink("Cerveza italiana", 450),
            drink("Café espresso", 200),
        ],
    },
];

// =========================================================================
// Gallery
// =========================================================================

pub const GALLERY_LABEL: &str = "Nuestra Galería";
pub const GALLERY_TITLE: &str = "Momentos Especiales";
pub const GALLERY_CTA_TITLE: &str = "Ambiente único para momentos especiales";
pub const GALLERY_CTA_TEXT: &str = "Espacios diseñados para crear recuerdos inolvidables en un entorno acogedor y elegante";
pub const GALLERY_CTA_BOOK: &str = "Reserva Ahora";
pub const GALLERY_CTA_OPEN: &str = "Ver Galería →";

pub const COLLAGE: [Photo; 11] = [
    photo(pexels!("1058277"), "Interior del restaurante"),
    photo(pexels!("1527603"), "Plato de pasta"),
    photo(pexels!("1437267"), "Espaguetis con mariscos"),
    photo(pexels!("1126728"), "Chef preparando comida"),
    photo(pexels!("784633"), "Cocina italiana"),
    photo(pexels!("696218"), "Interior elegante"),
    photo(pexels!("6605902"), "Bruschetta"),
    photo(pexels!("2664149"), "Vino italiano"),
    photo(pexels!("3535383"), "Mesa preparada para cena"),
    photo(pexels!("1279330"), "Pasta fresca"),
    photo(pexels!("4946517"), "Tiramisu casero"),
];

pub const CAROUSEL: [CarouselSlide; 15] = [
    slide(pexels!("1438672"), "Pasta casera con salsa de tomate y albahaca", "Pasta fresca con tomate y albahaca"),
    slide(pexels!("1566837"), "Pizza tradicional italiana recién horneada", "Pizza Napolitana tradicional"),
    slide(pexels!("2233729"), "Tiramisu casero con café y cacao", "Tiramisu casero"),
    slide(pexels!("1527603"), "Bruschetta con tomate y albahaca", "Bruschetta clásica"),
    slide(pexels!("2103949"), "Risotto cremoso con champiñones", "Risotto ai Funghi"),
    slide(pexels!("1437267"), "Espaguetis a la carbonara", "Spaghetti alla Carbonara"),
    slide(pexels!("769289"), "Gnocchi caseros con salsa de queso", "Gnocchi caseros"),
    slide(pexels!("2233730"), "Ravioles rellenos de espinaca y ricotta", "Ravioli di spinaci e ricotta"),
    slide(pexels!("1579926"), "Selección de aperitivos italianos", "Antipasto italiano"),
    slide(pexels!("1639562"), "Lasagna tradicional recién horneada", "Lasagna alla Bolognese"),
    slide(pexels!("784633"), "Ambiente acogedor en cocina italiana", "El corazón de nuestra cocina"),
    slide(pexels!("696218"), "Espacio de interior del restaurante", "Ambiente elegante y acogedor"),
    slide(pexels!("1058277"), "Interior del restaurante con decoración rústica", "Atmósfera única y acogedora"),
    slide(pexels!("67468"), "Vista exterior del restaurante italiano", "Nuestra casa desde 1985"),
    slide(pexels!("1126728"), "Chef preparando comida fresca", "El arte de la cocina italiana"),
];

// =========================================================================
// Contact and footer
// =========================================================================

pub const CONTACT_LABEL: &str = "Contáctanos";
pub const CONTACT_TITLE: &str = "Reserva Tu Mesa";
pub const CONTACT_INTRO: &str = "Reserva una mesa en nuestro restaurante y disfruta de una experiencia gastronómica inolvidable.";
pub const ADDRESS: &str = "Calle Italia 123, Ciudad, CP 12345";
pub const PHONE: &str = "+34 123 456 789";
pub const EMAIL: &str = "info@bellaitalia.com";

pub const OPENING_HOURS: [OpeningHours; 3] = [
    OpeningHours { days: "Lunes - Viernes", hours: "12:00 - 23:00" },
    OpeningHours { days: "Sábado", hours: "12:00 - 00:00" },
    OpeningHours { days: "Domingo", hours: "13:00 - 22:00" },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { name: "Facebook", href: "#" },
    SocialLink { name: "Instagram", href: "#" },
    SocialLink { name: "Twitter", href: "#" },
];

pub const FOOTER_TAGLINE: &str = "Auténtica cocina italiana con los mejores ingredientes y recetas tradicionales.";

pub const FOOTER_LINKS: [NavLink; 5] = [
    NavLink { label: "Inicio", target: "home" },
    NavLink { label: "Sobre Nosotros", target: "about" },
    NavLink { label: "Menú", target: "menu" },
    NavLink { label: "Galería", target: "gallery" },
    NavLink { label: "Contacto", target: "contact" },
];

// =========================================================================
// Pizza showcase
// =========================================================================

pub const PIZZA_BASE: &str = "pizza-base.svg";

pub const SHOWCASE_CAPTIONS: [Caption; 4] = [
    Caption { text: "Ingredientes frescos", role: CaptionRole::Badge, delay_ms: 3_500 },
    Caption { text: "Tradición italiana", role: CaptionRole::Badge, delay_ms: 4_000 },
    Caption { text: "El Arte de la Pizza", role: CaptionRole::Title, delay_ms: 4_500 },
    Caption {
        text: "La perfección está en cada detalle, desde la masa hasta el último ingrediente",
        role: CaptionRole::Subtitle,
        delay_ms: 4_800,
    },
];
