use quiz_core::model::Locale;

/// Fixed UI copy for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStrings {
    pub question: &'static str,
    pub out_of: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub submit: &'static str,
    pub confirm_title: &'static str,
    pub unattempted_questions: &'static str,
    pub confirm_warning: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub copied: &'static str,
    pub copy_failed: &'static str,
    pub dismiss: &'static str,
    pub translate: &'static str,
    pub share: &'static str,
    pub dark_mode: &'static str,
    pub light_mode: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub unattempted: &'static str,
    pub score: &'static str,
    pub time_used: &'static str,
    pub completed_at: &'static str,
    pub time_up: &'static str,
    pub show_answers: &'static str,
    pub hide_answers: &'static str,
    pub your_answer: &'static str,
    pub correct_answer: &'static str,
    pub not_answered: &'static str,
    pub try_again: &'static str,
}

const EN: UiStrings = UiStrings {
    question: "Question",
    out_of: "out of",
    previous: "Previous",
    next: "Next",
    submit: "Submit",
    confirm_title: "Submit Quiz?",
    unattempted_questions: "Unattempted Questions",
    confirm_warning: "Once submitted, you cannot modify your answers.",
    yes: "Yes",
    no: "No",
    copied: "Question copied to clipboard!",
    copy_failed: "Could not copy the question. Please try again.",
    dismiss: "Dismiss",
    translate: "Translate",
    share: "Share",
    dark_mode: "Dark Mode",
    light_mode: "Light Mode",
    correct: "Correct",
    incorrect: "Incorrect",
    unattempted: "Unattempted",
    score: "Score",
    time_used: "Time used",
    completed_at: "Completed",
    time_up: "Time is up! Your answers were submitted automatically.",
    show_answers: "Show answers",
    hide_answers: "Hide answers",
    your_answer: "Your answer",
    correct_answer: "Correct answer",
    not_answered: "Not answered",
    try_again: "Try Again",
};

const HI: UiStrings = UiStrings {
    question: "प्रश्न",
    out_of: "में से",
    previous: "पिछला",
    next: "अगला",
    submit: "सबमिट",
    confirm_title: "क्या आप वाकई सबमिट करना चाहते हैं?",
    unattempted_questions: "अप्रयासित",
    confirm_warning: "सबमिट करने के बाद, आप अपने उत्तरों में संशोधन नहीं कर सकते।",
    yes: "हाँ",
    no: "नहीं",
    copied: "प्रश्न क्लिपबोर्ड पर कॉपी हो गया!",
    copy_failed: "प्रश्न कॉपी नहीं हो सका। कृपया फिर से प्रयास करें।",
    dismiss: "बंद करें",
    translate: "अनुवाद",
    share: "साझा करें",
    dark_mode: "डार्क मोड",
    light_mode: "लाइट मोड",
    correct: "सही",
    incorrect: "गलत",
    unattempted: "अप्रयासित",
    score: "स्कोर",
    time_used: "लगा समय",
    completed_at: "पूर्ण",
    time_up: "समय समाप्त! आपके उत्तर अपने आप सबमिट हो गए।",
    show_answers: "उत्तर दिखाएँ",
    hide_answers: "उत्तर छिपाएँ",
    your_answer: "आपका उत्तर",
    correct_answer: "सही उत्तर",
    not_answered: "उत्तर नहीं दिया",
    try_again: "फिर से प्रयास करें",
};

#[must_use]
pub fn strings(locale: Locale) -> &'static UiStrings {
    match locale {
        Locale::En => &EN,
        Locale::Hi => &HI,
    }
}
