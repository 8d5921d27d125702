//! Static marketing content rendered on the home page.

use chrono::Weekday;

#[derive(Debug, Clone, Copy)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug)]
pub struct Hero {
    pub greeting: &'static str,
    pub headline: &'static str,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
    pub image: Image,
}

pub static HERO: Hero = Hero {
    greeting: "Benvenuta nel",
    headline: "tuo momento",
    keywords: &["Relax", "Bellezza", "Benessere"],
    description: "Ritagliati un momento solo per te con l'esperienza Lepri Hair Spa. \
                  Dove ogni dettaglio è pensato per il tuo benessere e la tua bellezza.",
    image: Image {
        src: "https://images.unsplash.com/photo-1560066984-138dadb4c035?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        alt: "Salone elegante Lepri Hair Spa",
    },
};

#[derive(Debug)]
pub struct ServiceFamily {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
}

pub static SERVICE_FAMILIES: &[ServiceFamily] = &[
    ServiceFamily {
        id: "taglio-style",
        title: "Taglio & Style",
        description: "Dai forma al tuo look con tagli di precisione e styling su misura. \
                      Ogni taglio è studiato per valorizzare i tuoi lineamenti e il tuo stile personale.",
        image: "https://images.unsplash.com/photo-1562322140-8baeececf3df?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
        features: &[
            "Consulenza personalizzata",
            "Tagli di tendenza",
            "Styling professionale",
            "Prodotti premium",
        ],
        price: "Da €45",
    },
    ServiceFamily {
        id: "colori-trattamenti",
        title: "Colori & Trattamenti",
        description: "Dalle meches a nuance complete, valorizziamo ogni capello con colori brillanti \
                      e trattamenti rigeneranti per una chioma sempre perfetta.",
        image: "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
        features: &[
            "Colorazioni naturali",
            "Meches e balayage",
            "Trattamenti ricostruttivi",
            "Tecniche innovative",
        ],
        price: "Da €65",
    },
    ServiceFamily {
        id: "spa-capillare",
        title: "Spa Capillare & Benessere",
        description: "Rigenerazione intensa, relax e nutrimento profondo. Un'esperienza sensoriale \
                      completa per il benessere dei tuoi capelli e della tua mente.",
        image: "https://images.unsplash.com/photo-1560066984-138dadb4c035?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
        features: &[
            "Massaggio rilassante",
            "Trattamenti nutrienti",
            "Aromaterapia",
            "Ambiente zen",
        ],
        price: "Da €80",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Portrait,
    Landscape,
    Square,
}

impl AspectRatio {
    pub fn css_class(self) -> &'static str {
        match self {
            AspectRatio::Portrait => "ratio-portrait",
            AspectRatio::Landscape => "ratio-landscape",
            AspectRatio::Square => "ratio-square",
        }
    }
}

#[derive(Debug)]
pub struct GalleryItem {
    pub id: u32,
    pub category: &'static str,
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub aspect: AspectRatio,
    pub client: &'static str,
}

pub static GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        category: "taglio",
        image: "https://images.unsplash.com/photo-1562322140-8baeececf3df?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
        title: "Taglio Moderno",
        description: "Un nuovo look che valorizza i lineamenti",
        aspect: AspectRatio::Portrait,
        client: "Sara",
    },
    GalleryItem {
        id: 2,
        category: "colore",
        image: "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
        title: "Trasformazione Colore",
        description: "Da un castano spento a riflessi dorati luminosi",
        aspect: AspectRatio::Landscape,
        client: "Maria",
    },
    GalleryItem {
        id: 3,
        category: "spa",
        image: "https://images.unsplash.com/photo-1560066984-138dadb4c035?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
        title: "Trattamento Spa",
        description: "Relax e rigenerazione per i tuoi capelli",
        aspect: AspectRatio::Square,
        client: "Elena",
    },
    GalleryItem {
        id: 4,
        category: "colore",
        image: "https://images.unsplash.com/photo-1521590832167-7bcbfaa6381f?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
        title: "Balayage Naturale",
        description: "Effetto sunkissed per un look naturale",
        aspect: AspectRatio::Portrait,
        client: "Giulia",
    },
    GalleryItem {
        id: 5,
        category: "taglio",
        image: "https://images.unsplash.com/photo-1580618672591-eb180b1a973f?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
        title: "Taglio Pixie",
        description: "Corto e di carattere",
        aspect: AspectRatio::Landscape,
        client: "Anna",
    },
    GalleryItem {
        id: 6,
        category: "spa",
        image: "https://images.unsplash.com/photo-1595476108010-b4d1f102b1b1?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
        title: "Trattamento Ricostruttivo",
        description: "Rigenerazione profonda per capelli danneggiati",
        aspect: AspectRatio::Portrait,
        client: "Francesca",
    },
    GalleryItem {
        id: 7,
        category: "colore",
        image: "https://images.unsplash.com/photo-1487412947147-5cebf100ffc2?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
        title: "Meches Dorate",
        description: "Riflessi luminosi per un look solare",
        aspect: AspectRatio::Square,
        client: "Valentina",
    },
    GalleryItem {
        id: 8,
        category: "taglio",
        image: "https://images.unsplash.com/photo-1492106087820-71f1a00d2b11?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
        title: "Bob Asimmetrico",
        description: "Geometrie moderne per un look contemporaneo",
        aspect: AspectRatio::Landscape,
        client: "Chiara",
    },
];

#[derive(Debug)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub motto: &'static str,
    pub image: &'static str,
    pub specialties: &'static [&'static str],
    pub experience: &'static str,
    pub bio: &'static str,
    pub achievements: &'static [&'static str],
    pub instagram: &'static str,
    pub followers: &'static str,
}

pub static TEAM: &[TeamMember] = &[
    TeamMember {
        id: "sara-lepri",
        name: "Sara Lepri",
        role: "Founder & Hair Artist",
        motto: "\"Trasformo il tuo stile, ma anche il tuo sorriso.\"",
        image: "https://images.unsplash.com/photo-1580618672591-eb180b1a973f?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
        specialties: &["Tagli Creativi", "Consulenza Stile", "Colorazioni Artistiche"],
        experience: "15+ anni",
        bio: "Sara è la visionaria dietro Lepri Hair Spa. Con oltre 15 anni di esperienza nel settore, \
              ha trasformato migliaia di look creando sempre qualcosa di unico per ogni cliente.",
        achievements: &[
            "Certificata presso Vidal Sassoon Academy",
            "Specializzazione in colorimetria avanzata",
            "Formatrice per giovani parrucchieri",
            "Premio \"Miglior Salone\" 2023",
        ],
        instagram: "@sara.lepri.hair",
        followers: "12.5K",
    },
    TeamMember {
        id: "marco-bianchi",
        name: "Marco Bianchi",
        role: "Specialista Colore",
        motto: "\"Gioco con le nuance, creo armonie cromatiche.\"",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
        specialties: &["Balayage", "Meches", "Correzioni Colore"],
        experience: "10+ anni",
        bio: "Marco è il nostro maestro del colore. La sua precisione tecnica e il suo occhio artistico \
              lo rendono il punto di riferimento per tutte le colorazioni più complesse.",
        achievements: &[
            "Master in Colorimetria Wella",
            "Specialista in correzioni colore",
            "Formazione continua L'Oréal Professionnel",
            "Artista per eventi fashion",
        ],
        instagram: "@marco.color.artist",
        followers: "8.2K",
    },
];

pub fn find_team_member(id: &str) -> Option<&'static TeamMember> {
    TEAM.iter().find(|member| member.id == id)
}

#[derive(Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub service: &'static str,
    pub image: &'static str,
    pub date: &'static str,
    pub verified: bool,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Martina F.",
        location: "Milano",
        rating: 5,
        text: "Mai sentita così coccolata, un'esperienza al top, super consigliato! \
               Sara ha trasformato completamente il mio look e mi ha fatto sentire una regina.",
        service: "Taglio & Colore",
        image: "https://images.unsplash.com/photo-1494790108755-2616b612b786?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
        date: "2 settimane fa",
        verified: true,
    },
    Testimonial {
        name: "Elena R.",
        location: "Milano",
        rating: 5,
        text: "Servizio impeccabile e ambiente rilassante: tornerò sicuramente. \
               Marco è un vero artista del colore, ha creato esattamente quello che avevo in mente.",
        service: "Balayage",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
        date: "1 mese fa",
        verified: true,
    },
    Testimonial {
        name: "Giulia M.",
        location: "Monza",
        rating: 5,
        text: "Professionalità e cura del dettaglio eccezionali. Il trattamento spa è stato \
               un momento di puro relax. Consigliatissimo a tutte!",
        service: "Spa Capillare",
        image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
        date: "3 settimane fa",
        verified: true,
    },
    Testimonial {
        name: "Francesca L.",
        location: "Milano",
        rating: 5,
        text: "Finalmente ho trovato il mio parrucchiere di fiducia! Atmosfera accogliente, \
               personale preparato e risultati sempre perfetti.",
        service: "Taglio & Style",
        image: "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
        date: "1 settimana fa",
        verified: true,
    },
    Testimonial {
        name: "Chiara B.",
        location: "Bergamo",
        rating: 5,
        text: "Un'esperienza che va oltre le aspettative. Ogni volta esco dal salone sentendomi \
               rinnovata e piena di energia. Grazie team Lepri!",
        service: "Trattamento Completo",
        image: "https://images.unsplash.com/photo-1489424731084-a5d8b219a5bb?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&q=80",
        date: "2 giorni fa",
        verified: true,
    },
];

#[derive(Debug)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub static STATS: &[Stat] = &[
    Stat {
        number: "500+",
        label: "Clienti Soddisfatte",
    },
    Stat {
        number: "5.0",
        label: "Rating Medio",
    },
    Stat {
        number: "15+",
        label: "Anni di Esperienza",
    },
];

#[derive(Debug)]
pub struct Promotion {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub discount: &'static str,
    pub original_price: &'static str,
    pub discounted_price: &'static str,
    pub valid_until: &'static str,
    pub image: &'static str,
    pub badge: &'static str,
    pub features: &'static [&'static str],
}

pub static PROMOTIONS: &[Promotion] = &[
    Promotion {
        id: "welcome",
        title: "Benvenuta in Famiglia",
        subtitle: "Offerta Primo Appuntamento",
        description: "Sconto del 20% su tutti i servizi per le nuove clienti. Un modo speciale \
                      per iniziare il tuo percorso di bellezza con noi.",
        discount: "20%",
        original_price: "€85",
        discounted_price: "€68",
        valid_until: "31 dicembre",
        image: "https://images.unsplash.com/photo-1560066984-138dadb4c035?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        badge: "Nuove Clienti",
        features: &["Consulenza gratuita", "Analisi del capello", "Styling incluso"],
    },
    Promotion {
        id: "spa-package",
        title: "Pacchetto Relax Completo",
        subtitle: "Hair Spa + Trattamento",
        description: "Combinazione perfetta di bellezza e benessere. Include hair spa, \
                      trattamento riparatore e styling finale.",
        discount: "30%",
        original_price: "€120",
        discounted_price: "€84",
        valid_until: "30 novembre",
        image: "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        badge: "Più Richiesto",
        features: &[
            "Hair Spa 60min",
            "Trattamento riparatore",
            "Maschera nutriente",
            "Styling professionale",
        ],
    },
    Promotion {
        id: "friends",
        title: "Porta un'Amica",
        subtitle: "Sconto per Entrambe",
        description: "Condividi la bellezza! Quando porti un'amica, entrambe ricevete uno \
                      sconto speciale sui vostri trattamenti.",
        discount: "15%",
        original_price: "€90",
        discounted_price: "€76.50",
        valid_until: "15 dicembre",
        image: "https://images.unsplash.com/photo-1521590832167-7bcbfaa6381f?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        badge: "Limitata",
        features: &["Sconto per entrambe", "Aperitivo offerto", "Foto ricordo"],
    },
];

/// The selected promotion, defaulting to the first one.
pub fn find_promotion(id: Option<&str>) -> &'static Promotion {
    id.and_then(|id| PROMOTIONS.iter().find(|promo| promo.id == id))
        .unwrap_or(&PROMOTIONS[0])
}

/// Seasonal offer shown with a live countdown. The end instant is configured.
#[derive(Debug)]
pub struct SeasonalOffer {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub discount: &'static str,
    pub image: &'static str,
}

pub static SEASONAL_OFFER: SeasonalOffer = SeasonalOffer {
    title: "Black Friday Beauty",
    subtitle: "Solo per 3 Giorni!",
    description: "La promozione più attesa dell'anno è qui. Sconti fino al 40% su tutti i servizi premium.",
    discount: "40%",
    image: "https://images.unsplash.com/photo-1562322140-8baeececf3df?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
};

#[derive(Debug)]
pub struct ContactInfo {
    pub street: &'static str,
    pub city: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub whatsapp: &'static str,
    pub instagram: &'static str,
    pub facebook: &'static str,
}

impl ContactInfo {
    pub fn full_address(&self) -> String {
        format!("{}, {}", self.street, self.city)
    }

    pub fn maps_url(&self) -> String {
        let query: String = self
            .full_address()
            .chars()
            .map(|c| match c {
                ' ' => '+',
                c => c,
            })
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | ',' | '.' | '-'))
            .collect();
        format!("https://maps.google.com/?q={query}")
    }

    pub fn whatsapp_url(&self) -> String {
        let digits: String = self.whatsapp.chars().filter(char::is_ascii_digit).collect();
        format!("https://wa.me/{digits}")
    }

    pub fn phone_href(&self) -> String {
        let compact: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{compact}")
    }
}

pub static CONTACT: ContactInfo = ContactInfo {
    street: "Via della Bellezza, 123",
    city: "20121 Milano (MI)",
    phone: "+39 02 1234 5678",
    email: "info@leprihairspa.com",
    whatsapp: "+39 312 345 6789",
    instagram: "@leprihairspa",
    facebook: "Lepri Hair Spa Milano",
};

#[derive(Debug)]
pub struct OpeningHours {
    pub weekday: Weekday,
    pub day: &'static str,
    pub hours: &'static str,
    pub closed: bool,
}

pub static OPENING_HOURS: &[OpeningHours] = &[
    OpeningHours {
        weekday: Weekday::Mon,
        day: "Lunedì",
        hours: "Chiuso",
        closed: true,
    },
    OpeningHours {
        weekday: Weekday::Tue,
        day: "Martedì",
        hours: "09:00 - 19:00",
        closed: false,
    },
    OpeningHours {
        weekday: Weekday::Wed,
        day: "Mercoledì",
        hours: "09:00 - 19:00",
        closed: false,
    },
    OpeningHours {
        weekday: Weekday::Thu,
        day: "Giovedì",
        hours: "09:00 - 20:00",
        closed: false,
    },
    OpeningHours {
        weekday: Weekday::Fri,
        day: "Venerdì",
        hours: "09:00 - 20:00",
        closed: false,
    },
    OpeningHours {
        weekday: Weekday::Sat,
        day: "Sabato",
        hours: "08:30 - 18:00",
        closed: false,
    },
    OpeningHours {
        weekday: Weekday::Sun,
        day: "Domenica",
        hours: "10:00 - 17:00",
        closed: false,
    },
];

#[derive(Debug)]
pub struct TransportOption {
    pub kind: &'static str,
    pub line: &'static str,
    pub station: &'static str,
    pub distance: &'static str,
}

pub static TRANSPORT: &[TransportOption] = &[
    TransportOption {
        kind: "Metro",
        line: "M1 (Rossa)",
        station: "Duomo",
        distance: "5 min a piedi",
    },
    TransportOption {
        kind: "Tram",
        line: "Linea 1, 2",
        station: "Scala",
        distance: "3 min a piedi",
    },
    TransportOption {
        kind: "Bus",
        line: "61, 94",
        station: "Via Manzoni",
        distance: "2 min a piedi",
    },
    TransportOption {
        kind: "Parcheggio",
        line: "Garage Manzoni",
        station: "Via Manzoni, 10",
        distance: "1 min a piedi",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_promotion_falls_back_to_first() {
        assert_eq!(find_promotion(Some("friends")).id, "friends");
        assert_eq!(find_promotion(Some("missing")).id, "welcome");
        assert_eq!(find_promotion(None).id, "welcome");
    }

    #[test]
    fn contact_links_are_derived_from_info() {
        assert_eq!(CONTACT.whatsapp_url(), "https://wa.me/393123456789");
        assert_eq!(CONTACT.phone_href(), "tel:+390212345678");
        assert_eq!(
            CONTACT.maps_url(),
            "https://maps.google.com/?q=Via+della+Bellezza,+123,+20121+Milano+MI"
        );
    }

    #[test]
    fn every_weekday_has_opening_hours() {
        assert_eq!(OPENING_HOURS.len(), 7);
        assert!(OPENING_HOURS.iter().any(|h| h.weekday == Weekday::Mon && h.closed));
    }
}
