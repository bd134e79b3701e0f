//! Save/reload behaviour of decks against a real directory.

use std::fs;

use flashdeck::{DeckManager, DeckName, DeckStore, Error, FlashcardId};
use tempfile::TempDir;

struct Fixture {
    _tmp: TempDir,
    store: DeckStore,
    manager: DeckManager,
}

/// A session with an empty, selected deck called `TestDeck`.
fn setup() -> Fixture {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let store = DeckStore::new(tmp.path().join("data").join("decks"));
    let mut manager = DeckManager::new();
    manager.create_deck("TestDeck").unwrap();
    manager.select_deck("TestDeck").unwrap();
    Fixture {
        _tmp: tmp,
        store,
        manager,
    }
}

fn name(s: &str) -> DeckName {
    DeckName::try_from(s).unwrap()
}

fn id(n: usize) -> FlashcardId {
    FlashcardId::try_from(n).unwrap()
}

impl Fixture {
    fn add(&mut self, question: &str, answer: &str) -> FlashcardId {
        self.manager
            .current_deck_mut()
            .unwrap()
            .create_flashcard(question, answer)
            .unwrap()
            .id()
    }

    fn save(&self) {
        self.manager.save_current_deck(&self.store).unwrap();
    }

    fn reload(&mut self) {
        self.manager.clear();
        self.manager.install(self.store.load_all_decks());
    }
}

#[test]
fn save_and_load_preserves_flashcard_data() {
    let mut fx = setup();
    fx.add("What is Java?", "A programming language.");
    fx.save();

    fx.reload();
    let deck = fx.manager.deck("TestDeck").expect("deck should be loaded");

    assert_eq!(deck.len(), 1);
    let card = &deck.flashcards()[0];
    assert_eq!(card.question(), "What is Java?");
    assert_eq!(card.answer(), "A programming language.");
    assert!(!card.is_learned());
}

#[test]
fn save_and_load_preserves_order_and_learned_status() {
    let mut fx = setup();
    fx.add("What is Java?", "A language.");
    let oop = fx.add("What is OOP?", "A paradigm.");
    fx.add("What is a JVM?", "A virtual machine.");
    fx.manager
        .current_deck_mut()
        .unwrap()
        .change_is_learned(oop, true)
        .unwrap();
    fx.save();

    fx.reload();
    let deck = fx.manager.deck("TestDeck").unwrap();

    let loaded: Vec<_> = deck
        .flashcards()
        .iter()
        .map(|c| (c.id().get(), c.question(), c.answer(), c.is_learned()))
        .collect();
    assert_eq!(
        loaded,
        vec![
            (1, "What is Java?", "A language.", false),
            (2, "What is OOP?", "A paradigm.", true),
            (3, "What is a JVM?", "A virtual machine.", false),
        ]
    );
}

#[test]
fn math_example_file_contents_and_reload() {
    let mut fx = setup();
    fx.manager.create_deck("Math").unwrap();
    fx.manager.select_deck("Math").unwrap();
    let card = fx.add("2+2?", "4");
    fx.manager
        .current_deck_mut()
        .unwrap()
        .change_is_learned(card, true)
        .unwrap();
    fx.save();

    let content = fs::read_to_string(fx.store.path_for(&name("Math"))).unwrap();
    assert_eq!(content, "Q: 2+2?\nA: 4\nLearned: true\n\n");

    fx.reload();
    let deck = fx.manager.deck("Math").unwrap();
    assert_eq!(deck.len(), 1);
    let card = &deck.flashcards()[0];
    assert_eq!(card.id(), id(1));
    assert_eq!(card.question(), "2+2?");
    assert_eq!(card.answer(), "4");
    assert!(card.is_learned());
}

#[test]
fn deleted_flashcard_is_gone_after_reload() {
    let mut fx = setup();
    fx.add("What is Java?", "A programming language.");
    fx.add("What is OOP?", "A paradigm.");
    fx.save();
    fx.reload();
    fx.manager.select_deck("TestDeck").unwrap();

    let deck = fx.manager.current_deck_mut().unwrap();
    let before = deck.len();
    let removed = deck.delete_flashcard(id(1)).unwrap();
    fx.save();

    fx.reload();
    let deck = fx.manager.deck("TestDeck").unwrap();
    assert_eq!(deck.len(), before - 1);
    assert!(
        deck.flashcards()
            .iter()
            .all(|c| c.question() != removed.question())
    );
}

#[test]
fn deleting_only_flashcard_leaves_empty_deck() {
    let mut fx = setup();
    let card = fx.add("What is Java?", "A programming language.");
    fx.manager
        .current_deck_mut()
        .unwrap()
        .delete_flashcard(card)
        .unwrap();
    fx.save();

    fx.reload();
    let deck = fx.manager.deck("TestDeck").expect("deck should be loaded");
    assert!(deck.is_empty());
}

#[test]
fn rename_deck_file_changes_filename() {
    let mut fx = setup();
    fx.add("What is Java?", "A language.");
    fx.save();

    fx.store
        .rename_deck_file(&name("TestDeck"), &name("RenamedDeck"))
        .unwrap();

    assert!(!fx.store.path_for(&name("TestDeck")).exists());
    assert!(fx.store.path_for(&name("RenamedDeck")).exists());

    let decks = fx.store.load_all_decks();
    assert!(!decks.contains_key("TestDeck"));
    assert_eq!(decks["RenamedDeck"].len(), 1);
    assert_eq!(decks["RenamedDeck"].name().as_str(), "RenamedDeck");
}

#[test]
fn delete_deck_file_removes_file() {
    let mut fx = setup();
    fx.add("What is Java?", "A language.");
    fx.save();
    let path = fx.store.path_for(&name("TestDeck"));
    assert!(path.exists());

    fx.store.delete_deck_file(&name("TestDeck")).unwrap();

    assert!(!path.exists());
}

#[test]
fn delete_deck_file_when_absent_is_ok() {
    let fx = setup();
    assert!(fx.store.delete_deck_file(&name("TestDeck")).is_ok());
}

#[test]
fn load_decks_when_folder_missing_returns_empty_map() {
    let fx = setup();
    assert!(!fx.store.dir().exists());
    assert!(fx.store.load_all_decks().is_empty());
}

#[test]
fn create_deck_with_invalid_name_is_invalid_argument() {
    let mut fx = setup();

    assert!(matches!(
        fx.manager.create_deck("Invalid/Name"),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        fx.manager.create_deck("Invalid\\Name"),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        fx.manager.create_deck("TestDeck"),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn load_deck_missing_learned_field_defaults_to_unlearned() {
    let fx = setup();
    fs::create_dir_all(fx.store.dir()).unwrap();
    fs::write(
        fx.store.path_for(&name("TestDeck")),
        "Q: Sample question\nA: Sample answer\n\n",
    )
    .unwrap();

    let decks = fx.store.load_all_decks();
    let deck = decks.get("TestDeck").expect("deck should be loaded");

    assert_eq!(deck.len(), 1);
    assert!(!deck.flashcards()[0].is_learned());
}

#[test]
fn corrupted_records_do_not_block_other_decks() {
    let fx = setup();
    fs::create_dir_all(fx.store.dir()).unwrap();
    fs::write(
        fx.store.dir().join("Messy.txt"),
        "garbage\nQ: lonely question\n\nA: lonely answer\n\nQ: good\nA: card\nLearned: maybe\n",
    )
    .unwrap();
    fs::write(fx.store.dir().join("Binary.txt"), b"\xff\xfe").unwrap();
    fs::write(fx.store.dir().join("Clean.txt"), "Q: a\nA: b\nLearned: true\n\n").unwrap();

    let decks = fx.store.load_all_decks();

    assert_eq!(decks.len(), 2);
    let messy = &decks["Messy"];
    assert_eq!(messy.len(), 1);
    assert_eq!(messy.flashcards()[0].question(), "good");
    assert!(!messy.flashcards()[0].is_learned());
    assert!(decks["Clean"].flashcards()[0].is_learned());
}

#[test]
fn manager_rename_then_reload_uses_new_name() {
    let mut fx = setup();
    fx.add("What is Java?", "A language.");
    fx.save();

    fx.manager
        .rename_deck("TestDeck", "Java", &fx.store)
        .unwrap();
    fx.save();

    fx.reload();
    assert!(fx.manager.deck("TestDeck").is_none());
    assert_eq!(fx.manager.deck("Java").unwrap().len(), 1);
}

#[test]
fn manager_delete_removes_deck_from_disk() {
    let mut fx = setup();
    fx.add("What is Java?", "A language.");
    fx.save();

    fx.manager.delete_deck("TestDeck", &fx.store).unwrap();

    assert!(matches!(
        fx.manager.current_deck(),
        Err(Error::NoDeckSelected)
    ));
    fx.reload();
    assert!(fx.manager.is_empty());
}

#[test]
fn ids_restart_from_one_after_reload() {
    let mut fx = setup();
    fx.add("a", "1");
    fx.add("b", "2");
    fx.add("c", "3");
    fx.manager
        .current_deck_mut()
        .unwrap()
        .delete_flashcard(id(2))
        .unwrap();
    fx.save();

    fx.reload();
    let ids: Vec<_> = fx
        .manager
        .deck("TestDeck")
        .unwrap()
        .flashcards()
        .iter()
        .map(|c| c.id().get())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}
