//! Message-tree search.
//!
//! A message carries attachments and a list of replies, each of which is a
//! message again. Threads can nest arbitrarily deep, so both walks keep their
//! frontier in the loop arguments instead of recursing.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::trampoline::call1;

const MATCHES: &str = "matches";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub size: u64,
}

impl Attachment {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Attachment {
            name: name.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub subject: String,
    pub attachments: Vec<Attachment>,
    pub replies: Vec<Message>,
}

impl Message {
    pub fn new(subject: impl Into<String>) -> Self {
        Message {
            subject: subject.into(),
            ..Default::default()
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn with_reply(mut self, reply: Message) -> Self {
        self.replies.push(reply);
        self
    }
}

/// All attachments in the thread rooted at `root` accepted by `predicate`,
/// in breadth-first order. Matches accumulate in the context data bag.
pub fn find_attachments<P>(root: &Message, predicate: P) -> Vec<Attachment>
where
    P: Fn(&Attachment) -> bool,
{
    call1(VecDeque::from([root]), |mut queue, ctx| {
        match queue.pop_front() {
            Some(message) => {
                let matches = ctx
                    .data_mut()
                    .get_or_insert_with(MATCHES, Vec::<Attachment>::new);
                if let Some(matches) = matches {
                    matches.extend(message.attachments.iter().filter(|a| predicate(a)).cloned());
                }
                queue.extend(message.replies.iter());
                ctx.request_continue(queue);
            }
            None => {
                let matches = ctx
                    .data_mut()
                    .remove::<Vec<Attachment>>(MATCHES)
                    .unwrap_or_default();
                ctx.request_exit(matches);
            }
        }
    })
    .unwrap_or_default()
}

/// Append every subject in the thread to `sink`, depth-first in reply order.
///
/// `sink` belongs to the caller and may be shared with other threads.
pub fn record_subjects(root: &Message, sink: &Mutex<Vec<String>>) {
    let _: Option<()> = call1(vec![root], |mut stack, ctx| {
        if let Some(message) = stack.pop() {
            sink.lock().push(message.subject.clone());
            stack.extend(message.replies.iter().rev());
            ctx.request_continue(stack);
        }
    });
}
