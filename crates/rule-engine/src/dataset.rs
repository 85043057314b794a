//! 内置联系人数据集
//!
//! 服务启动时加载一次，进程生命周期内只读。

use crate::models::{Contact, Plan};

/// 构造内置的 15 条联系人记录
pub fn builtin_contacts() -> Vec<Contact> {
    vec![
        contact("c001", "Alice Johnson", "alice@acme.com", "US", "2022-03-15", 12, Plan::Pro),
        contact("c002", "Bob Smith", "bob@globex.com", "UK", "2023-07-22", 2, Plan::Free),
        contact("c003", "Carol White", "carol@initech.com", "CA", "2021-11-01", 34, Plan::Enterprise),
        contact("c004", "David Lee", "david@umbrella.co", "US", "2024-01-08", 0, Plan::Free),
        contact("c005", "Eva Martinez", "eva@massive.io", "MX", "2023-05-19", 8, Plan::Starter),
        contact("c006", "Frank Chen", "frank@hooli.net", "US", "2020-09-30", 57, Plan::Enterprise),
        contact("c007", "Grace Kim", "grace@pied.com", "KR", "2023-12-05", 5, Plan::Starter),
        contact("c008", "Hank Torres", "hank@dunder.com", "US", "2019-06-14", 91, Plan::Enterprise),
        contact("c009", "Iris Nakamura", "iris@initech.com", "JP", "2022-08-27", 21, Plan::Pro),
        contact("c010", "Jack Okafor", "jack@weyland.com", "NG", "2024-02-14", 1, Plan::Free),
        contact("c011", "Karen Patel", "karen@acme.com", "IN", "2021-04-03", 44, Plan::Pro),
        contact("c012", "Liam Brennan", "liam@globex.com", "IE", "2023-09-11", 3, Plan::Starter),
        contact("c013", "Maya Stern", "maya@massive.io", "DE", "2022-01-20", 18, Plan::Pro),
        contact("c014", "Noah Williams", "noah@umbrella.co", "AU", "2020-12-31", 66, Plan::Enterprise),
        contact("c015", "Olivia Scott", "olivia@hooli.net", "US", "2023-03-28", 9, Plan::Starter),
    ]
}

fn contact(
    id: &str,
    name: &str,
    email: &str,
    country: &str,
    signup_date: &str,
    purchase_count: u32,
    plan: Plan,
) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        country: country.to_string(),
        signup_date: signup_date.to_string(),
        purchase_count,
        plan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_size_and_unique_ids() {
        let contacts = builtin_contacts();
        assert_eq!(contacts.len(), 15);

        let ids: HashSet<&str> = contacts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn test_first_record_is_sample_contact() {
        let contacts = builtin_contacts();
        assert_eq!(contacts[0].id, "c001");
        assert_eq!(contacts[0].name, "Alice Johnson");
        assert_eq!(contacts[0].plan, Plan::Pro);
    }

    #[test]
    fn test_country_distribution() {
        let contacts = builtin_contacts();
        let us_count = contacts.iter().filter(|c| c.country == "US").count();
        assert_eq!(us_count, 5);
    }
}
