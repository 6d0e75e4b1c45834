//! Hand-authored cue patterns for the words that have them.
//!
//! Patterns are compiled case-insensitively and matched with search
//! semantics. The lexicon sets feed the feature extractor; the override sets
//! are a narrower subset trusted enough to overrule the classifier.

pub const DIRECTOR_LEXICON_SENSE1: &[&str] = &[
    r"\b(executive|managing|marketing|hospital|regional|operations|finance|technical|program|communications|research|security|customer\s*service)\s+director\b",
    r"\bdirector\s+of\s+(human\s*resources|sales|operations|communications|research|security|customer\s*service|finance|marketing|it|hr)\b",
    r"\b(board|company|organization|department|division|nonprofit|museum|school|hospital)\s+director\b",
    r"\bdirector\s+(approved|announced|implemented|presented|oversees|coordinates|manages|selected|curated|met|streamlined|improved)\b",
    r"\b(chief\s*executive|ceo|board\s+of\s+directors)\b",
];

pub const DIRECTOR_LEXICON_SENSE2: &[&str] = &[
    r"\b(film|movie|theater|theatre|cinema|documentary|short\s*film|feature\s*film)\s+director\b",
    r"\bdirector\s+(shouted|called|chose|collaborated|received|wrapped|spent|worked|answered|transformed|blocked|aspires)\b",
    r"\b(actor|actress|scene|shot|take|cut|cinematographer|screenwriter|screening|premiere|festival|pre-?production|principal\s+photography)\b",
    r"\bdirector'?s\s+(cut|vision|style|work|previous\s+work|approach)\b",
    r"\b(award-?winning|independent|aspiring|documentary|theater|theatre)\s+director\b",
    r"\b(director|directors)\s+(study|learn|earn|secure|plan|shoot|film|direct)\b",
    r"\b(film\s+school|film\s+festival|standing\s+ovation|visual\s+storytelling|narrative\s+structures)\b",
];

pub const DIRECTOR_OVERRIDE_SENSE1: &[&str] = &[
    r"\b(executive|managing|marketing|hospital|regional|operations|finance|technical|program|communications|research|security|customer\s*service)\s+director\b",
    r"\bdirector\s+of\s+(human\s*resources|sales|operations|communications|research|security|customer\s*service|finance|marketing|it|hr)\b",
    r"\b(board|company|organization|department|division|nonprofit|museum|school|hospital)\s+director\b",
    r"\b(chief\s*executive|ceo|board\s+of\s+directors)\b",
];

pub const DIRECTOR_OVERRIDE_SENSE2: &[&str] = &[
    r"\b(film|movie|theater|theatre|cinema|documentary|short\s*film|feature\s*film)\s+director\b",
    r"\b(actor|actress|scene|shot|take|cut|cinematographer|screenwriter|screening|premiere|festival|pre-?production|principal\s+photography)\b",
    r"\bdirector'?s\s+(cut|vision|style|work|previous\s+work|approach)\b",
    r"\b(award-?winning|independent|aspiring|documentary|theater|theatre)\s+director\b",
    r"\b(film\s+school|film\s+festival|standing\s+ovation|visual\s+storytelling|narrative\s+structures)\b",
];

pub const RUBBISH_LEXICON_SENSE1: &[&str] = &[
    r"\b(bin|trash|garbage|landfill|dump(ed)?|litter|garbage\s*truck|trash\s*bag|rubbish\s*heap|refuse|debris|waste|scrap)\b",
    r"\b(clean\s*up|dispose|collection|garbage\s*collector|curbside\s*pickup|collection\s*day|pick-?up\s*day)\b",
    r"\b(recycle|recycling|waste\s+management|skip\s+bin|rubbish\s*bin|trash\s*can|landfill\s*site|compost|compactor)\b",
    r"\b(tip|dumpster|wheelie\s*bin|refuse\s*site|transfer\s*station|municipal\s*dump)\b",
    r"\b(bag(s)?\s*of\s*rubbish|pile(s)?\s*of\s*rubbish)\b",
];

pub const RUBBISH_LEXICON_SENSE2: &[&str] = &[
    r"\b(nonsense|nonsensical|codswallop|tripe|drivel|baloney|bollocks|hogwash|poppycock|claptrap|twaddle|bunkum?|malarkey|guff|piffle|balderdash|flimflam|tommyrot)\b",
    r"(absolute|utter|load of|complete|pile of|lot of|load of old|total|sheer)\s+rubbish",
    r"\btalk(ing)?\s+rubbish\b",
    r"\b(that'?s|this is)\s+rubbish\b",
    r"\brubbish!\b",
    r"\b(rubbish|silly|ridiculous)\s+idea\b",
    r"\bthis\s+article\s+is\s+rubbish\b",
];

pub const RUBBISH_OVERRIDE_SENSE1: &[&str] = &[
    r"\b(bin|trash|garbage|landfill|dump(ed)?|litter|garbage\s*truck|trash\s*bag|rubbish\s*heap|refuse|debris|waste|scrap)\b",
    r"\b(clean\s*up|dispose|collection|garbage\s*collector|curbside\s*pickup|collection\s*day)\b",
    r"\b(recycle|recycling|waste\s+management|skip\s+bin|rubbish\s*bin|trash\s*can|landfill\s*site|compost|compactor)\b",
    r"\b(tip|dumpster|wheelie\s*bin|refuse\s*site|transfer\s*station|municipal\s*dump)\b",
    r"\b(bag(s)?\s*of\s*rubbish|pile(s)?\s*of\s*rubbish)\b",
];

pub const RUBBISH_OVERRIDE_SENSE2: &[&str] = &[
    r"\b(nonsense|nonsensical|codswallop|tripe|drivel|baloney|bollocks|hogwash|poppycock|claptrap|twaddle|bunkum?|malarkey|guff|piffle|balderdash|flimflam|tommyrot)\b",
    r"(absolute|utter|load of|complete|pile of|lot of|load of old|total|sheer)\s+rubbish",
    r"\btalk(ing)?\s+rubbish\b",
    r"\brubbish!\b",
    r"\b(that'?s|this is)\s+rubbish\b",
    r"\b(rubbish|silly|ridiculous)\s+idea\b",
    r"\bthis\s+article\s+is\s+rubbish\b",
];
