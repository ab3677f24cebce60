use kokua_trie_lib::shell::DEFAULT_WORDS;
use kokua_trie_lib::trie::{KokuaTrie, KokuaTrieConfig, KokuaTrieError};

/// Run a basic test to verify insertion and membership checking.
fn test_trie_basic() -> bool {
    let mut trie = KokuaTrie::new();

    if trie.insert("apple").is_err() || trie.insert("app").is_err() {
        return false;
    }

    let has_apple = trie.contains("apple").unwrap_or(false);
    let has_app = trie.contains("app").unwrap_or(false);
    let has_prefix_only = trie.contains("ap").unwrap_or(true);

    has_apple && has_app && !has_prefix_only && trie.len() == 2
}

/// Verify that suggestions come back complete and in ascending order.
fn test_ordered_autocomplete() -> bool {
    let mut trie = KokuaTrie::new();
    for word in DEFAULT_WORDS {
        if trie.insert(word).is_err() {
            return false;
        }
    }

    let suggestions = match trie.autocomplete("ban") {
        Ok(words) => words,
        Err(_) => return false,
    };
    if suggestions != ["banana", "band", "bandana"] {
        return false;
    }

    // The empty prefix must list the whole lexicon, still ascending.
    let all = match trie.autocomplete("") {
        Ok(words) => words,
        Err(_) => return false,
    };
    all.len() == DEFAULT_WORDS.len() && all.windows(2).all(|pair| pair[0] < pair[1])
}

/// Verify that invalid input is rejected and leaves the trie unchanged.
fn test_validation() -> bool {
    let mut trie = KokuaTrie::new();
    if trie.insert("cat").is_err() {
        return false;
    }

    let rejected = matches!(
        trie.insert("ca!t"),
        Err(KokuaTrieError::InvalidSymbol {
            symbol: '!',
            position: 2
        })
    );

    // No partial "ca" branch may survive the failed insert.
    let unchanged = trie.len() == 1
        && trie.autocomplete("ca").map_or(false, |words| words == ["cat"]);

    rejected && unchanged
}

/// Verify the lazy iterator agrees with eager collection.
fn test_lazy_iterator() -> bool {
    let mut trie = KokuaTrie::with_config(KokuaTrieConfig::new().with_fold_case(true));
    for word in ["Apricot", "APP", "apple"] {
        if trie.insert(word).is_err() {
            return false;
        }
    }

    let eager = match trie.autocomplete("ap") {
        Ok(words) => words,
        Err(_) => return false,
    };
    let lazy: Vec<String> = match trie.completions("AP") {
        Ok(completions) => completions.collect(),
        Err(_) => return false,
    };

    eager == lazy && eager == ["app", "apple", "apricot"]
}

/// Test the clear operation correctly resets the trie.
fn test_clear() -> bool {
    let mut trie = KokuaTrie::new();
    if trie.insert("tree").is_err() || trie.insert("trunk").is_err() {
        return false;
    }

    trie.clear();

    trie.is_empty()
        && trie
            .autocomplete("")
            .map_or(false, |words| words.is_empty())
}

/// Main function to run the KokuaTrie verification suite.
/// Reports success/failure for each test with appropriate output formatting.
fn main() {
    println!("Running Kokua Trie Verification Tests");
    println!("=====================================\n");

    let mut passed = 0;
    let mut failed = 0;

    // Test 1: Basic operations
    if test_trie_basic() {
        println!("✅ Basic operations: PASSED");
        passed += 1;
    } else {
        println!("❌ Basic operations: FAILED");
        failed += 1;
    }

    // Test 2: Ordered autocomplete
    if test_ordered_autocomplete() {
        println!("✅ Ordered autocomplete: PASSED");
        passed += 1;
    } else {
        println!("❌ Ordered autocomplete: FAILED");
        failed += 1;
    }

    // Test 3: Input validation
    if test_validation() {
        println!("✅ Input validation: PASSED");
        passed += 1;
    } else {
        println!("❌ Input validation: FAILED");
        failed += 1;
    }

    // Test 4: Lazy iteration
    if test_lazy_iterator() {
        println!("✅ Lazy iteration: PASSED");
        passed += 1;
    } else {
        println!("❌ Lazy iteration: FAILED");
        failed += 1;
    }

    // Test 5: Clear operation
    if test_clear() {
        println!("✅ Clear operation: PASSED");
        passed += 1;
    } else {
        println!("❌ Clear operation: FAILED");
        failed += 1;
    }

    println!("\nTest Results: {} passed, {} failed", passed, failed);
    if failed == 0 {
        println!("All tests passed! KokuaTrie implementation is verified.");
    } else {
        println!("Some tests failed! Please check the implementation.");
    }
}
