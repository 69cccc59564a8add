//! The enchanted-forest catalog bundled with the game.
//!
//! Events are listed in declaration order, which is also the order in which
//! simultaneously unlocked events are offered.

use crate::events::{EventDefinition, InputHandler};

/// World-state names written by the catalog's input handlers.
pub mod names {
    pub const WIZARD_DESCRIPTION: &str = "wizardDescription";
    pub const SPRITE_NAME: &str = "spriteName";
    pub const WOLF_NAME: &str = "wolfName";
    pub const DRYAD_NAME: &str = "dryadName";
    pub const SPIRIT_NAME: &str = "spiritName";
}

/// Build the full forest catalog.
pub fn forest_catalog() -> Vec<EventDefinition> {
    vec![
        // Awakening
        EventDefinition::new(
            "mirror",
            "Look in the Mirror",
            "You are a wizard. Your reflection stares back, full of potential and purpose.",
        )
        .with_input(
            "What do you see? Describe yourself as a wizard:",
            InputHandler::store_as(names::WIZARD_DESCRIPTION),
        ),
        EventDefinition::new(
            "look-around",
            "Look Around You",
            "You are deep within an enchanted forest. The air hums with forgotten magic, the ground thick with untamed growth.",
        ),
        EventDefinition::new(
            "look-inside",
            "Look Inside",
            "Your goal is clear: to grow a magical colony, a haven for mystical beings, and to protect this enchanted land.",
        ),
        // Settling in
        EventDefinition::new(
            "clear-space",
            "Clear Space for a Basic Hut",
            "The forest is dense here. You need to make room for the simplest of shelters.",
        )
        .with_prerequisite("look-inside"),
        EventDefinition::new(
            "gather-materials",
            "Start Gathering Materials",
            "Using your magic, begin gathering basic materials from the surroundings.",
        )
        .with_prerequisite("clear-space"),
        EventDefinition::new(
            "look-creatures",
            "Look Out for Creatures",
            "Reach out with your magic to sense creatures nearby. Some may be friendly, others dangerous.",
        )
        .with_prerequisite("gather-materials"),
        EventDefinition::new(
            "welcome-sprite",
            "Welcome a Forest Sprite",
            "A small forest sprite emerges from the undergrowth. It seems curious and willing to help. What will you name it?",
        )
        .with_prerequisite("look-creatures")
        .with_input("Name the forest sprite:", InputHandler::store_as(names::SPRITE_NAME)),
        EventDefinition::new(
            "build-basic-hut",
            "Build a Basic Hut",
            "With space cleared, you can construct a simple hut for shelter. It won't be much, but it's a start.",
        )
        .with_prerequisite("clear-space"),
        // The grove and the wolf
        EventDefinition::new(
            "explore-grove",
            "Explore the Nearby Grove",
            "The grove nearby hums with magical energy. Shall we investigate?",
        )
        .with_prerequisite("look-around"),
        EventDefinition::new(
            "find-wolf",
            "A Wolf Appears",
            "A massive wolf with glowing eyes watches from the shadows. It seems to be evaluating you.",
        )
        .with_prerequisite("explore-grove"),
        EventDefinition::new(
            "name-wolf",
            "Name the Wolf",
            "The wolf approaches and bows its head slightly, waiting for your command. It has no name. What will you call it?",
        )
        .with_prerequisite("find-wolf")
        .with_input("Name the wolf:", InputHandler::store_as(names::WOLF_NAME)),
        EventDefinition::new(
            "wolf-trust",
            "Earn the Wolf's Trust",
            "{wolfName} is cautious. It seems to require a gesture of goodwill before fully trusting you.",
        )
        .with_prerequisite("name-wolf"),
        EventDefinition::new(
            "build-wolf-den",
            "Construct a Wolf Den",
            "A proper den might help {wolfName} feel at home. Shall we build it?",
        )
        .with_prerequisite("wolf-trust"),
        EventDefinition::new(
            "gather-herbs",
            "Gather Magical Herbs",
            "The grove is rich with magical herbs. Harvesting them might prove useful for alchemy or healing.",
        )
        .with_prerequisite("explore-grove"),
        EventDefinition::new(
            "learn-alchemy",
            "Learn Alchemy",
            "The herbs you've gathered could be used for powerful potions. Shall we begin experimenting?",
        )
        .with_prerequisite("gather-herbs"),
        // Growing the colony
        EventDefinition::new(
            "build-workshop",
            "Construct a Workshop",
            "A workshop would allow you to craft tools and experiment with magical materials.",
        )
        .with_prerequisites(["build-basic-hut", "gather-materials"]),
        EventDefinition::new(
            "expand-clearing",
            "Expand the Clearing",
            "The current space feels cramped. Shall we clear more of the forest to grow the colony?",
        )
        .with_prerequisite("build-basic-hut"),
        EventDefinition::new(
            "meet-dryad",
            "Meet a Dryad",
            "A dryad emerges from a nearby tree, curious about your work. It offers guidance in exchange for your protection of the forest.",
        )
        .with_prerequisite("expand-clearing"),
        EventDefinition::new(
            "name-dryad",
            "Name the Dryad",
            "The dryad has no name. It looks at you expectantly, waiting to be claimed as part of your colony.",
        )
        .with_prerequisite("meet-dryad")
        .with_input("Name the dryad:", InputHandler::store_as(names::DRYAD_NAME)),
        EventDefinition::new(
            "build-gathering-hall",
            "Construct a Gathering Hall",
            "A central place for your magical beings to meet and plan could help organize the colony.",
        )
        .with_prerequisites(["build-basic-hut", "name-dryad"]),
        EventDefinition::new(
            "defend-from-threat",
            "Defend Against a Threat",
            "A shadowy figure looms at the edge of the clearing. It feels hostile. What shall we do?",
        )
        .with_prerequisites(["expand-clearing", "meet-dryad"]),
        EventDefinition::new(
            "research-magic",
            "Research New Magic",
            "The knowledge you've gained from the grove and dryad offers new magical insights. Shall we study them?",
        )
        .with_prerequisites(["meet-dryad", "learn-alchemy"]),
        // The cave
        EventDefinition::new(
            "discover-cave",
            "Discover a Hidden Cave",
            "While expanding the clearing, you stumble upon the entrance to a dark cave. Shall we explore?",
        )
        .with_prerequisite("expand-clearing"),
        EventDefinition::new(
            "explore-cave",
            "Explore the Cave",
            "The cave entrance is dark and foreboding, but you sense untold treasures and dangers within.",
        )
        .with_prerequisite("discover-cave"),
        EventDefinition::new(
            "meet-spirit",
            "Encounter a Spirit",
            "A ghostly spirit floats toward you. It seems tied to the magic of this land.",
        )
        .with_prerequisite("explore-cave"),
        EventDefinition::new(
            "name-spirit",
            "Name the Spirit",
            "The spirit lingers, awaiting your recognition. Shall we name it and invite it to join us?",
        )
        .with_prerequisite("meet-spirit")
        .with_input("Name the spirit:", InputHandler::store_as(names::SPIRIT_NAME)),
        EventDefinition::new(
            "build-library",
            "Build a Magical Library",
            "{spiritName} suggests creating a library to preserve magical knowledge. Shall we begin?",
        )
        .with_prerequisite("name-spirit"),
        EventDefinition::new(
            "trade-with-forest",
            "Trade with the Forest",
            "*{dryadName}* suggests a trade system to balance your needs with the forest's preservation.",
        )
        .with_prerequisite("name-dryad"),
        EventDefinition::new(
            "prepare-for-winter",
            "Prepare for Winter",
            "The air grows colder. Supplies are needed to ensure the colony's survival through the harsh winter.",
        )
        .with_prerequisites(["expand-clearing", "build-basic-hut"]),
    ]
}
