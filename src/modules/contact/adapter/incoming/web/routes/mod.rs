mod contact;
mod mailbox;

pub use contact::{
    list_contacts_handler, submit_contact_handler, ContactRequest, __path_list_contacts_handler,
    __path_submit_contact_handler,
};
pub use mailbox::{
    delete_contact_handler, mailbox_handler, mark_contact_read_handler, MailboxQuery,
    __path_delete_contact_handler, __path_mailbox_handler, __path_mark_contact_read_handler,
};
