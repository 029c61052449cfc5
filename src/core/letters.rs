/// "Open when..." letters shown in the letter modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterKind {
    Sad,
    Happy,
    Bored,
}

impl LetterKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "sad" => Some(LetterKind::Sad),
            "happy" => Some(LetterKind::Happy),
            "bored" => Some(LetterKind::Bored),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LetterKind::Sad => "When/If You Feel Sad",
            LetterKind::Happy => "Yay! You're Happy!",
            LetterKind::Bored => "Bored?",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            LetterKind::Sad => "Remember that you are incredibly strong. This feeling will pass. I am always a phone call away. 🫂",
            LetterKind::Happy => "Keep shining! Your happiness is contagious. Go treat yourself to something nice! 🍦",
            LetterKind::Bored => "Did you know octopuses have 3 hearts? Now you do. Go text me, let's do something fun! 🐙",
        }
    }
}
