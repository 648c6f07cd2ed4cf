//! Scripted assistant: keyword dispatch and the session chat log.
//!
//! There is no inference here. `respond` lowercases the input and walks an
//! ordered rule table; the first rule with a matching keyword wins and its
//! fixed markdown template is returned. Inputs that match nothing fall
//! through to the general template. Because rules are tested in order, an
//! input touching two categories ("cancel my contract") always resolves to
//! the earlier rule - that tie-break is part of the contract, so the table
//! order below is load-bearing.

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single entry in the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// One dispatch rule: if any keyword occurs in the lowercased input, the
/// rule's response template is returned.
pub struct Rule {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

/// Dispatch rules in priority order.
pub const RULES: &[Rule] = &[
    Rule {
        topic: "contracts",
        keywords: &["contract", "agreement"],
        response: CONTRACT_INFO,
    },
    Rule {
        topic: "commissions",
        keywords: &["commission", "payment", "money"],
        response: COMMISSION_INFO,
    },
    Rule {
        topic: "claims",
        keywords: &["claim", "damage", "loss"],
        response: CLAIMS_INFO,
    },
    Rule {
        topic: "cancellations",
        keywords: &["cancel", "terminate", "end"],
        response: CANCELLATION_INFO,
    },
];

/// Map free-text input to a canned response. Pure and stateless; callers
/// that want the exchange recorded go through [`ChatLog::ask`].
pub fn respond(input: &str) -> &'static str {
    let input = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| input.contains(kw)))
        .map(|rule| rule.response)
        .unwrap_or(GENERAL_INFO)
}

/// A predefined question with its fixed answer, offered as a one-key
/// shortcut on the assistant page.
pub struct QuickAction {
    pub label: &'static str,
    pub response: &'static str,
}

/// Quick actions in display order.
pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "How do I process a new claim?",
        response: CLAIM_STEPS,
    },
    QuickAction {
        label: "What's the commission rate?",
        response: COMMISSION_RATES,
    },
    QuickAction {
        label: "Contract modification process?",
        response: CONTRACT_MODIFICATIONS,
    },
];

/// Append-only chat transcript for one session.
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// Create an empty transcript.
    pub fn new() -> Self {
        ChatLog::default()
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether the transcript holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Dispatch a question, record both sides of the exchange, and return
    /// the assistant's response.
    pub fn ask(&mut self, question: &str) -> &'static str {
        let response = respond(question);
        self.push_exchange(question, response);
        response
    }

    /// Record a question/answer pair verbatim, e.g. from a quick action.
    pub fn push_exchange(&mut self, question: &str, response: &str) {
        self.messages.push(ChatMessage {
            role: Role::User,
            content: question.to_string(),
        });
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: response.to_string(),
        });
    }

    /// Discard the whole transcript.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

pub const CONTRACT_INFO: &str = "\
**Contract Information:**

I can help you with contract-related questions. Here's what I know:

**Standard Contract Types:**
- Service agreements
- Insurance policies
- Commission contracts
- Cancellation agreements

**Processing Times:**
- New contracts: 3-5 business days
- Modifications: 2-3 business days
- Renewals: 1-2 business days

**Need Help?** Contact the legal team for complex contract questions.";

pub const COMMISSION_INFO: &str = "\
**Commission Information:**

**Current Commission Structure:**
- Standard policies: 12.5%
- Premium policies: 15.0%
- Renewals: 10.0%
- New business: 20.0%

**Payment Schedule:**
- Monthly commission runs: 15th of each month
- Processing time: 3-5 business days
- Minimum payout: $100

**Performance Bonuses:**
- Quarterly targets: 10% bonus
- Annual targets: 25% bonus";

pub const CLAIMS_INFO: &str = "\
**Claims Processing:**

**Urgent Claims (< 24 hours):**
- Fire damage
- Water damage
- Theft/loss

**Standard Processing:**
- Initial review: 24-48 hours
- Investigation: 5-7 business days
- Payment processing: 3-5 business days

**Required Documentation:**
- Incident report
- Police report (if applicable)
- Photos/videos
- Repair estimates

**Need Assistance?** Contact the claims department.";

pub const CANCELLATION_INFO: &str = "\
**Cancellation Process:**

**Cancellation Types:**
- Policyholder request
- Non-payment
- Fraud
- Policy violation

**Processing Time:**
- Standard cancellation: 3-5 business days
- Refund processing: 5-7 business days

**Refund Calculation:**
- Pro-rated refund based on unused coverage
- Minus any fees or penalties
- Processing fee: $25

**Questions?** Contact the cancellations department.";

pub const GENERAL_INFO: &str = "\
**General Business Information:**

I'm here to help with your business questions. I can assist with:

- Task management
- Analytics and reporting
- Commission information
- Contract procedures
- Claims processing
- Cancellation procedures

Ask about any of these areas, or use the quick actions for common \
questions.";

const CLAIM_STEPS: &str = "\
**Claim Processing Steps:**
1. Receive claim documentation
2. Verify policy coverage
3. Assign claim number
4. Review by adjuster
5. Process payment (5-7 business days)";

const COMMISSION_RATES: &str = "\
**Commission Rates:**
- Standard: 12.5%
- Premium: 15.0%
- Renewal: 10.0%
- New Business: 20.0%";

const CONTRACT_MODIFICATIONS: &str = "\
**Contract Modifications:**
1. Submit modification request
2. Legal team review (2-3 days)
3. Client approval required
4. Update system records
5. Send confirmation";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commission_question_gets_commission_template() {
        let response = respond("What is the commission rate?");
        assert!(response.contains("Commission Information"));
        assert!(!response.contains("Contract Information"));
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        // "cancel my contract" hits both the contract and cancellation
        // keyword sets; the contract rule is listed first.
        let response = respond("cancel my contract");
        assert!(response.contains("Contract Information"));
    }

    #[test]
    fn unmatched_input_falls_back_to_general_template() {
        assert_eq!(respond("hello"), GENERAL_INFO);
        assert_eq!(respond(""), GENERAL_INFO);
    }

    #[test]
    fn matching_ignores_case() {
        assert!(respond("DAMAGE report").contains("Claims Processing"));
        assert!(respond("TERMINATE my policy").contains("Cancellation Process"));
    }

    #[test]
    fn every_rule_is_reachable_by_its_own_keywords() {
        for rule in RULES {
            for kw in rule.keywords {
                // Guard the overlap tie-break: a bare keyword must not be
                // captured by an earlier rule.
                assert_eq!(respond(kw), rule.response, "keyword {kw:?}");
            }
        }
    }

    #[test]
    fn ask_records_both_sides_of_the_exchange() {
        let mut log = ChatLog::new();
        let response = log.ask("what about payment?");

        assert_eq!(log.messages().len(), 2);
        assert_eq!(log.messages()[0].role, Role::User);
        assert_eq!(log.messages()[0].content, "what about payment?");
        assert_eq!(log.messages()[1].role, Role::Assistant);
        assert_eq!(log.messages()[1].content, response);
    }

    #[test]
    fn clear_empties_the_transcript() {
        let mut log = ChatLog::new();
        log.ask("hello");
        log.push_exchange(QUICK_ACTIONS[0].label, QUICK_ACTIONS[0].response);
        assert!(!log.is_empty());

        log.clear();
        assert!(log.is_empty());
    }
}
