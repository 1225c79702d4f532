//! Pre-built `virsh` outputs for tests.

/// `domstats` output for three domains: a running web server with one disk
/// and one NIC, an idle database, and a shut-off build box.
pub const DOMSTATS_MIXED: &str = "Domain: 'web'
  state.state=1
  state.reason=1
  balloon.current=4194304
  balloon.maximum=4194304
  balloon.unused=1048576
  balloon.available=4000000
  balloon.usable=3000000
  balloon.rss=2097152
  vcpu.current=2
  vcpu.maximum=2
  vcpu.0.state=1
  vcpu.0.time=12000000000
  vcpu.0.exits.sum=1500
  vcpu.0.io_exits.sum=300
  vcpu.1.state=1
  vcpu.1.time=8000000000
  vcpu.1.exits.sum=900
  vcpu.1.io_exits.sum=100
  block.count=1
  block.0.name=vda
  block.0.path=/var/lib/libvirt/images/web.qcow2
  block.0.rd.reqs=5000
  block.0.rd.bytes=104857600
  block.0.wr.reqs=2000
  block.0.wr.bytes=41943040
  block.0.allocation=1428627456
  block.0.capacity=21474836480
  block.0.physical=1429151744
  net.count=1
  net.0.name=vnet0
  net.0.rx.bytes=1048576
  net.0.rx.pkts=1200
  net.0.rx.errs=0
  net.0.rx.drop=2
  net.0.tx.bytes=524288
  net.0.tx.pkts=800
  net.0.tx.errs=1
  net.0.tx.drop=0
Domain: 'db'
  state.state=2
  state.reason=0
  balloon.current=8388608
  balloon.unused=4194304
  vcpu.0.state=1
  vcpu.0.time=1000000000
Domain: 'build'
  state.state=5
  state.reason=1
  balloon.current=2097152
";

/// `domifaddr web --full --source lease` output.
pub const DOMIFADDR_WEB: &str = " Name       MAC address          Protocol     Address
-------------------------------------------------------------------------------
 vnet0      52:54:00:12:34:56    ipv4         192.168.122.238/24
";
