//! Daily quote section data: a fixed list and a uniform random pick.

use rand::seq::SliceRandom;
use rand::Rng;

/// A quotation with attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

/// The built-in quote list.
pub static QUOTES: [Quote; 10] = [
    Quote {
        text: "Be yourself; everyone else is already taken.",
        author: "Oscar Wilde",
    },
    Quote {
        text: "So many books, so little time.",
        author: "Frank Zappa",
    },
    Quote {
        text: "Two things are infinite: the universe and human stupidity; and I'm not sure about the universe.",
        author: "Albert Einstein",
    },
    Quote {
        text: "A room without books is like a body without a soul.",
        author: "Marcus Tullius Cicero",
    },
    Quote {
        text: "Be who you are and say what you feel, because those who mind don't matter, and those who matter don't mind.",
        author: "Bernard M. Baruch",
    },
    Quote {
        text: "You've gotta dance like there's nobody watching, Love like you'll never be hurt, Sing like there's nobody listening, And live like it's heaven on earth.",
        author: "William W. Purkey",
    },
    Quote {
        text: "You know you're in love when you can't fall asleep because reality is finally better than your dreams.",
        author: "Dr. Seuss",
    },
    Quote {
        text: "You only live once, but if you do it right, once is enough.",
        author: "Mae West",
    },
    Quote {
        text: "Be the change that you wish to see in the world.",
        author: "Mahatma Gandhi",
    },
    Quote {
        text: "In three words I can sum up everything I've learned about life: it goes on.",
        author: "Robert Frost",
    },
];

/// Pick one quote uniformly at random.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static Quote {
    // The list is non-empty, so choose cannot fail
    QUOTES.choose(rng).unwrap_or(&QUOTES[0])
}

/// Today's quote, picked with the thread RNG.
pub fn quote_of_the_day() -> &'static Quote {
    pick(&mut rand::thread_rng())
}
