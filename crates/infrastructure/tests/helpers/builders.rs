use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, CNAME, PTR};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Builds the answer a nameserver would send back for `request`.
pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn answering(request: &Message) -> Self {
        let mut message = Message::new(request.id(), MessageType::Response, OpCode::Query);
        message.set_recursion_desired(request.recursion_desired());
        message.set_recursion_available(true);
        for query in request.queries() {
            message.add_query(query.clone());
        }
        Self { message }
    }

    pub fn with_id(mut self, id: u16) -> Self {
        let mut header = *self.message.header();
        header.set_id(id);
        self.message.set_header(header);
        self
    }

    pub fn a(mut self, name: &str, ip: Ipv4Addr) -> Self {
        self.message
            .add_answer(Record::from_rdata(fqdn(name), 60, RData::A(A(ip))));
        self
    }

    pub fn cname(mut self, name: &str, target: &str) -> Self {
        self.message.add_answer(Record::from_rdata(
            fqdn(name),
            300,
            RData::CNAME(CNAME(fqdn(target))),
        ));
        self
    }

    pub fn ptr(mut self, name: &str, target: &str) -> Self {
        self.message
            .add_answer(Record::from_rdata(fqdn(name), 3600, RData::PTR(PTR(fqdn(target)))));
        self
    }

    pub fn truncated(mut self) -> Self {
        self.message.set_truncated(true);
        self
    }

    pub fn rcode(mut self, code: ResponseCode) -> Self {
        self.message.set_response_code(code);
        self
    }

    pub fn build(self) -> Message {
        self.message
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        encode(&self.message)
    }
}

pub fn encode(message: &Message) -> Vec<u8> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

fn fqdn(name: &str) -> Name {
    let mut name = Name::from_str(name).unwrap();
    name.set_fqdn(true);
    name
}
