//! Word lists backing the tagger and the lemmatizer.
//!
//! Everything here is lowercase. The tables are small on purpose: they hold
//! closed-class words, irregular inflections, and the adjectives whose
//! comparative forms are recognised.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Closed-class words and frequent open-class words with a fixed tag.
const FIXED_TAGS: &[(&str, &str)] = &[
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"), ("these", "DT"),
    ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"), ("any", "DT"), ("no", "DT"),
    ("all", "DT"), ("both", "DT"), ("another", "DT"), ("either", "DT"), ("neither", "DT"),
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"), ("we", "PRP"),
    ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("us", "PRP"), ("them", "PRP"),
    ("myself", "PRP"), ("yourself", "PRP"), ("himself", "PRP"), ("herself", "PRP"),
    ("itself", "PRP"), ("ourselves", "PRP"), ("themselves", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"), ("its", "PRP$"),
    ("our", "PRP$"), ("their", "PRP$"),
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("from", "IN"), ("about", "IN"), ("into", "IN"), ("over", "IN"),
    ("under", "IN"), ("after", "IN"), ("before", "IN"), ("between", "IN"), ("through", "IN"),
    ("during", "IN"), ("without", "IN"), ("within", "IN"), ("against", "IN"), ("among", "IN"),
    ("since", "IN"), ("until", "IN"), ("upon", "IN"), ("than", "IN"), ("as", "IN"),
    ("because", "IN"), ("if", "IN"), ("while", "IN"), ("although", "IN"), ("though", "IN"),
    ("whether", "IN"), ("across", "IN"), ("behind", "IN"), ("beyond", "IN"), ("near", "IN"),
    ("toward", "IN"), ("towards", "IN"), ("onto", "IN"), ("via", "IN"), ("per", "IN"),
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"), ("so", "CC"),
    ("to", "TO"),
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"), ("shall", "MD"),
    ("should", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"), ("ca", "MD"), ("wo", "MD"),
    ("who", "WP"), ("what", "WP"), ("whom", "WP"), ("which", "WDT"), ("whose", "WP$"),
    ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
    ("there", "EX"),
    ("'s", "POS"),
    ("be", "VB"), ("am", "VBP"), ("are", "VBP"), ("is", "VBZ"), ("was", "VBD"), ("were", "VBD"),
    ("been", "VBN"), ("being", "VBG"),
    ("have", "VBP"), ("has", "VBZ"), ("had", "VBD"), ("having", "VBG"),
    ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"), ("done", "VBN"), ("doing", "VBG"),
    ("not", "RB"), ("n't", "RB"), ("very", "RB"), ("too", "RB"), ("also", "RB"), ("just", "RB"),
    ("only", "RB"), ("never", "RB"), ("always", "RB"), ("often", "RB"), ("sometimes", "RB"),
    ("fast", "RB"), ("well", "RB"), ("here", "RB"), ("now", "RB"), ("then", "RB"), ("soon", "RB"),
    ("already", "RB"), ("still", "RB"), ("again", "RB"), ("quite", "RB"), ("rather", "RB"),
    ("almost", "RB"), ("even", "RB"), ("ever", "RB"), ("perhaps", "RB"), ("maybe", "RB"),
    ("together", "RB"), ("away", "RB"), ("back", "RB"), ("once", "RB"), ("later", "RB"),
    ("instead", "RB"), ("however", "RB"), ("therefore", "RB"), ("thus", "RB"), ("hard", "RB"),
    ("up", "RP"), ("down", "RP"), ("out", "RP"), ("off", "RP"),
    ("better", "JJR"), ("best", "JJS"), ("worse", "JJR"), ("worst", "JJS"), ("more", "JJR"),
    ("most", "JJS"), ("less", "JJR"), ("least", "JJS"), ("further", "JJR"), ("farther", "JJR"),
    ("other", "JJ"), ("such", "JJ"), ("same", "JJ"), ("own", "JJ"), ("many", "JJ"), ("much", "JJ"),
    ("few", "JJ"), ("several", "JJ"), ("clever", "JJ"), ("proper", "JJ"), ("bitter", "JJ"),
    ("eager", "JJ"), ("tender", "JJ"), ("sober", "JJ"), ("upper", "JJ"), ("inner", "JJ"),
    ("outer", "JJ"), ("former", "JJ"), ("latter", "JJ"), ("silver", "JJ"),
    ("something", "NN"), ("nothing", "NN"), ("anything", "NN"), ("everything", "NN"),
    ("morning", "NN"), ("evening", "NN"), ("thing", "NN"), ("king", "NN"), ("ring", "NN"),
    ("wing", "NN"), ("spring", "NN"), ("string", "NN"), ("ceiling", "NN"), ("building", "NN"),
    ("news", "NN"), ("series", "NN"), ("species", "NN"), ("people", "NNS"),
];

/// Base-form adjectives that accept comparative and superlative endings.
const BASE_ADJECTIVES: &[&str] = &[
    "big", "small", "fast", "slow", "quick", "large", "long", "short", "tall", "high", "low",
    "old", "young", "new", "great", "little", "good", "bad", "hot", "cold", "warm", "cool",
    "happy", "sad", "easy", "hard", "early", "late", "strong", "weak", "rich", "poor", "dark",
    "light", "bright", "deep", "wide", "narrow", "thick", "thin", "fat", "heavy", "busy",
    "clean", "clear", "close", "near", "far", "fine", "free", "full", "kind", "loud", "nice",
    "quiet", "safe", "sharp", "simple", "smart", "soft", "strange", "sweet", "true", "wise",
    "pretty", "funny", "lucky", "angry", "dirty", "noisy", "healthy", "wealthy",
    "gentle", "noble", "brave", "cheap", "calm", "fresh", "green", "red", "wet", "dry",
    "sure", "rare", "pure", "mild", "wild", "rough", "tough", "smooth", "steep", "broad",
    "bold", "fair", "firm", "flat", "grand", "harsh", "keen", "lazy", "ugly", "tiny", "huge",
];

/// Irregular verb forms mapped to their base.
const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("'m", "be"), ("'re", "be"),
    ("has", "have"), ("had", "have"), ("having", "have"), ("'ve", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"),
    ("went", "go"), ("gone", "go"), ("goes", "go"),
    ("ran", "run"), ("saw", "see"), ("seen", "see"), ("came", "come"), ("took", "take"),
    ("taken", "take"), ("made", "make"), ("said", "say"), ("got", "get"), ("gotten", "get"),
    ("gave", "give"), ("given", "give"), ("found", "find"), ("thought", "think"),
    ("told", "tell"), ("became", "become"), ("left", "leave"), ("felt", "feel"),
    ("brought", "bring"), ("began", "begin"), ("begun", "begin"), ("kept", "keep"),
    ("held", "hold"), ("wrote", "write"), ("written", "write"), ("stood", "stand"),
    ("heard", "hear"), ("meant", "mean"), ("met", "meet"), ("paid", "pay"), ("sat", "sit"),
    ("spoke", "speak"), ("spoken", "speak"), ("led", "lead"), ("grew", "grow"),
    ("grown", "grow"), ("lost", "lose"), ("fell", "fall"), ("fallen", "fall"), ("sent", "send"),
    ("built", "build"), ("understood", "understand"), ("drew", "draw"), ("drawn", "draw"),
    ("broke", "break"), ("broken", "break"), ("spent", "spend"), ("rose", "rise"),
    ("risen", "rise"), ("drove", "drive"), ("driven", "drive"), ("bought", "buy"),
    ("wore", "wear"), ("worn", "wear"), ("chose", "choose"), ("chosen", "choose"),
    ("sang", "sing"), ("sung", "sing"), ("swam", "swim"), ("swum", "swim"), ("ate", "eat"),
    ("eaten", "eat"), ("drank", "drink"), ("drunk", "drink"), ("flew", "fly"), ("flown", "fly"),
    ("knew", "know"), ("known", "know"), ("threw", "throw"), ("thrown", "throw"),
    ("forgot", "forget"), ("forgotten", "forget"), ("froze", "freeze"), ("frozen", "freeze"),
    ("hid", "hide"), ("hidden", "hide"), ("rode", "ride"), ("ridden", "ride"), ("shook", "shake"),
    ("shaken", "shake"), ("stole", "steal"), ("stolen", "steal"), ("woke", "wake"),
    ("woken", "wake"), ("taught", "teach"), ("caught", "catch"), ("fought", "fight"),
    ("sought", "seek"), ("sold", "sell"), ("slept", "sleep"), ("fed", "feed"), ("fled", "flee"),
    ("bled", "bleed"), ("won", "win"), ("hung", "hang"), ("dug", "dig"), ("stuck", "stick"),
    ("struck", "strike"), ("swore", "swear"), ("sworn", "swear"), ("tore", "tear"),
    ("torn", "tear"), ("bore", "bear"), ("born", "bear"), ("lain", "lie"),
    ("laid", "lay"), ("dealt", "deal"), ("dreamt", "dream"), ("learnt", "learn"),
    ("burnt", "burn"), ("lent", "lend"), ("bent", "bend"), ("shot", "shoot"), ("slid", "slide"),
    ("spun", "spin"), ("wept", "weep"), ("swept", "sweep"), ("crept", "creep"),
    ("dying", "die"), ("lying", "lie"), ("tying", "tie"), ("used", "use"),
    ("agreed", "agree"), ("disagreed", "disagree"), ("freed", "free"),
    ("guaranteed", "guarantee"), ("decreed", "decree"), ("created", "create"),
    ("creating", "create"), ("creates", "create"),
];

/// Irregular plural nouns mapped to their singular.
const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"), ("women", "woman"), ("children", "child"), ("feet", "foot"),
    ("teeth", "tooth"), ("mice", "mouse"), ("geese", "goose"), ("oxen", "ox"), ("lives", "life"),
    ("wives", "wife"), ("knives", "knife"), ("leaves", "leaf"), ("wolves", "wolf"),
    ("halves", "half"), ("selves", "self"), ("shelves", "shelf"), ("thieves", "thief"),
    ("loaves", "loaf"), ("calves", "calf"), ("data", "datum"), ("criteria", "criterion"),
    ("phenomena", "phenomenon"), ("analyses", "analysis"), ("crises", "crisis"),
    ("theses", "thesis"), ("indices", "index"), ("potatoes", "potato"), ("tomatoes", "tomato"),
    ("heroes", "hero"), ("echoes", "echo"), ("firemen", "fireman"), ("policemen", "policeman"),
];

/// Nouns that look plural but are their own base form.
const INVARIANT_NOUNS: &[&str] = &[
    "news", "series", "species", "means", "physics", "mathematics", "politics", "economics",
    "lens", "people", "sheep", "deer", "fish", "aircraft", "headquarters",
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"), ("further", "far"),
    ("farther", "far"), ("furthest", "far"), ("farthest", "far"), ("less", "little"),
    ("least", "little"), ("elder", "old"), ("eldest", "old"),
];

const ADVERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("best", "well"), ("better", "well"), ("deeper", "deeply"), ("farther", "far"),
    ("further", "far"), ("harder", "hard"), ("hardest", "hard"),
];

lazy_static! {
    pub static ref FIXED: HashMap<&'static str, &'static str> = FIXED_TAGS.iter().copied().collect();
    pub static ref ADJECTIVES: HashSet<&'static str> = BASE_ADJECTIVES.iter().copied().collect();
    pub static ref VERB_EXC: HashMap<&'static str, &'static str> = VERB_EXCEPTIONS.iter().copied().collect();
    pub static ref NOUN_EXC: HashMap<&'static str, &'static str> = NOUN_EXCEPTIONS.iter().copied().collect();
    pub static ref NOUN_INVARIANT: HashSet<&'static str> = INVARIANT_NOUNS.iter().copied().collect();
    pub static ref ADJ_EXC: HashMap<&'static str, &'static str> = ADJECTIVE_EXCEPTIONS.iter().copied().collect();
    pub static ref ADV_EXC: HashMap<&'static str, &'static str> = ADVERB_EXCEPTIONS.iter().copied().collect();
}

/// Tag for irregular verb forms not in [`FIXED_TAGS`]: past participles get
/// `VBN`, other non-base forms `VBD`.
pub fn irregular_verb_tag(word: &str) -> Option<&'static str> {
    let base = VERB_EXC.get(word)?;
    if *base == word { return None; }
    let participle = word.ends_with("en") || word.ends_with("wn") || word.ends_with("rn")
        || matches!(word, "gone" | "done" | "sung" | "swum" | "drunk" | "begun" | "lain");
    if participle {
        Some("VBN")
    } else if word.ends_with("ing") {
        Some("VBG")
    } else if word.ends_with('s') {
        Some("VBZ")
    } else {
        Some("VBD")
    }
}

pub fn is_subject_pronoun(word: &str) -> bool {
    matches!(word, "i" | "you" | "he" | "she" | "it" | "we" | "they")
}

pub fn is_be_form(word: &str) -> bool {
    matches!(word, "be" | "am" | "is" | "are" | "was" | "were" | "been" | "being")
}
